//! Integration test: solve raw form fields with the reference solver,
//! draw the result into a scene and export it to SVG.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tricanvas_core::{
    Category, PointsSolver, Primitive, RenderConfig, Scene, SceneRenderer, SceneState,
    TriangleSolver, read_parameters, read_point_parameters,
};
use tricanvas_export::{SvgMetadata, config_metadata_json, to_svg};
use tricanvas_solver::ReferenceSolver;

fn config(width: f64, height: f64) -> RenderConfig {
    RenderConfig {
        width,
        height,
        ..RenderConfig::default()
    }
}

fn renderer(config: &RenderConfig) -> SceneRenderer<Scene> {
    SceneRenderer::new(
        Scene::new(config.width, config.height),
        config.visibility,
    )
}

fn circle_radii(scene: &Scene) -> Vec<(Category, f64)> {
    scene
        .elements()
        .iter()
        .filter_map(|e| match e.primitive() {
            Primitive::Circle { radius, .. } => Some((e.category()?, *radius)),
            _ => None,
        })
        .collect()
}

#[test]
fn three_points_to_svg() {
    let config = config(100.0, 100.0);
    let params = read_point_parameters([
        ("ax", "0"),
        ("ay", "0"),
        ("bx", "3"),
        ("by", "0"),
        ("cx", "0"),
        ("cy", "4"),
    ])
    .unwrap();
    let output = ReferenceSolver.solve_points(&params);

    let mut renderer = renderer(&config);
    renderer.draw_points(&output, &config).unwrap();
    let scene = renderer.into_surface();
    assert_eq!(scene.state(), SceneState::Populated);

    let config_json = config_metadata_json(&config).unwrap();
    let metadata = SvgMetadata {
        title: Some("three points"),
        config_json: Some(&config_json),
        ..SvgMetadata::default()
    };
    let svg = to_svg(&scene, &metadata);
    eprintln!("SVG: {} bytes", svg.len());

    assert!(svg.contains("M12.5,100 L87.5,100 L12.5,0 z"));
    assert!(svg.contains(r#"cx="37.5""#));
    assert!(svg.contains(r#"r="25""#));
    assert!(svg.contains(r#"r="62.5""#));
    assert_eq!(svg.matches("<text").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("<metadata>"));
}

#[test]
fn side_angle_matches_three_points() {
    let config = config(100.0, 100.0);
    let output = ReferenceSolver.solve(&read_parameters([("a", "5"), ("b", "4"), ("c", "3")]));
    assert_eq!(output.solutions.len(), 1);

    let mut renderer = renderer(&config);
    renderer
        .draw_side_angle(&output, &ReferenceSolver, &config)
        .unwrap();
    let scene = renderer.into_surface();

    let radii = circle_radii(&scene);
    assert_eq!(radii.len(), 2);
    for (category, radius) in radii {
        let expected = match category {
            Category::Incircle => 25.0,
            Category::Circumcircle => 62.5,
            Category::Centroid => unreachable!("centroid is drawn as a cross"),
        };
        assert!(
            (radius - expected).abs() < 1e-9,
            "{category:?}: expected {expected}, got {radius}"
        );
    }

    let svg = to_svg(&scene, &SvgMetadata::default());
    assert_eq!(svg.matches("<path").count(), 4);
    assert_eq!(svg.matches("<text").count(), 3);
}

#[test]
fn unsolvable_input_exports_empty_document() {
    let config = RenderConfig::default();
    let output = ReferenceSolver.solve(&read_parameters([("a", "1"), ("b", "2"), ("c", "10")]));
    assert!(output.solutions.is_empty());

    let mut renderer = renderer(&config);
    renderer
        .draw_side_angle(&output, &ReferenceSolver, &config)
        .unwrap();
    let scene = renderer.into_surface();
    assert_eq!(scene.state(), SceneState::Empty);

    let svg = to_svg(&scene, &SvgMetadata::default());
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<path"));
}

#[test]
fn initial_visibility_hides_category() {
    let mut config = config(400.0, 300.0);
    config.visibility.set(Category::Circumcircle, false);
    let params = read_point_parameters([
        ("ax", "-2"),
        ("ay", "1"),
        ("bx", "6"),
        ("by", "0"),
        ("cx", "1"),
        ("cy", "5"),
    ])
    .unwrap();

    let mut renderer = renderer(&config);
    renderer
        .draw_points(&ReferenceSolver.solve_points(&params), &config)
        .unwrap();
    let svg = to_svg(renderer.surface(), &SvgMetadata::default());

    assert_eq!(svg.matches("circumcircle hidden").count(), 2);
    assert!(svg.contains(r#"class="incircle""#));
    assert!(!svg.contains("incircle hidden"));
}
