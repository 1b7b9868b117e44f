//! SVG export serializer.
//!
//! Converts a rendered [`Scene`] into an SVG string using the [`svg`]
//! crate for document construction, XML escaping, and path data
//! formatting.
//!
//! Every scene element becomes one SVG element, in draw order:
//!
//! - polygons and cross markers become `<path>` elements
//! - circles become `<circle>` elements
//! - labels become `<text>` elements
//!
//! Elements tagged with a [`Category`] carry its class name, and hidden
//! elements additionally carry the `hidden` class.  An embedded
//! `<style>` rule hides that class, so toggling visibility never changes
//! the document structure.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{
    Circle, Description, Element, Path, Style, Text as TextElement, Title,
};
use svg::node::{Node, Text, Value};

use tricanvas_core::{Category, Point, Primitive, Scene, SceneElement, Surface, cross_segments};

/// Class added to hidden elements.
pub const HIDDEN_CLASS: &str = "hidden";

/// Stylesheet embedded in every document.
const STYLESHEET: &str = "path, circle { fill: none; stroke: black; stroke-width: 1; } \
                          text { font-family: sans-serif; font-size: 12px; } \
                          .hidden { display: none; }";

/// Namespace of the `<metadata>` payload.
const METADATA_NAMESPACE: &str = "urn:tricanvas:config";

/// Metadata to embed in the SVG document.
///
/// All fields are optional.  Text values are XML-escaped by the `svg`
/// crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    pub description: Option<&'a str>,

    /// Serialized render configuration, emitted inside `<metadata>` in a
    /// namespaced `<tricanvas:config>` element.
    pub config_json: Option<&'a str>,
}

/// Build the `d` attribute of a closed polygon.
///
/// Returns an empty string for fewer than 2 points.
///
/// # Examples
///
/// ```
/// use tricanvas_core::Point;
/// use tricanvas_export::build_polygon_data;
///
/// let d = build_polygon_data(&[
///     Point::new(0.0, 10.0),
///     Point::new(20.0, 10.0),
///     Point::new(0.0, 0.0),
/// ]);
/// assert_eq!(d, "M0,10 L20,10 L0,0 z");
/// ```
#[must_use]
pub fn build_polygon_data(points: &[Point]) -> String {
    let [first, rest @ ..] = points else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }

    let mut data = Data::new().move_to((first.x, first.y));
    for p in rest {
        data = data.line_to((p.x, p.y));
    }
    String::from(Value::from(data.close()))
}

/// Build the `d` attribute of a cross marker: two diagonal strokes as
/// separate subpaths.
///
/// # Examples
///
/// ```
/// use tricanvas_core::Point;
/// use tricanvas_export::build_cross_data;
///
/// let d = build_cross_data(Point::new(10.0, 10.0), 5.0);
/// assert_eq!(d, "M5,5 L15,15 M5,15 L15,5");
/// ```
#[must_use]
pub fn build_cross_data(center: Point, half_length: f64) -> String {
    let data = cross_segments(center, half_length)
        .into_iter()
        .fold(Data::new(), |data, segment| {
            data.move_to((segment.from.x, segment.from.y))
                .line_to((segment.to.x, segment.to.y))
        });
    String::from(Value::from(data))
}

/// The `class` attribute of `element`, if it needs one.
fn class_attribute(element: &SceneElement) -> Option<String> {
    let category = element.category().map(Category::class_name);
    let hidden = element.is_hidden().then_some(HIDDEN_CLASS);
    match (category, hidden) {
        (Some(category), Some(hidden)) => Some(format!("{category} {hidden}")),
        (Some(class), None) | (None, Some(class)) => Some(class.to_owned()),
        (None, None) => None,
    }
}

/// Box `node`, adding `class` when there is one.
fn classed<N: Node + 'static>(mut node: N, class: Option<String>) -> Box<dyn Node> {
    if let Some(class) = class {
        node.assign("class", class);
    }
    Box::new(node)
}

/// Convert one scene element.  Returns `None` for shapes with nothing
/// to draw.
fn element_node(element: &SceneElement) -> Option<Box<dyn Node>> {
    let class = class_attribute(element);
    let node = match element.primitive() {
        Primitive::Polygon(points) => {
            let d = build_polygon_data(points);
            if d.is_empty() {
                return None;
            }
            classed(Path::new().set("d", d), class)
        }
        Primitive::Cross {
            center,
            half_length,
        } => classed(
            Path::new().set("d", build_cross_data(*center, *half_length)),
            class,
        ),
        Primitive::Circle { center, radius } => classed(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius),
            class,
        ),
        Primitive::Label { anchor, text } => classed(
            TextElement::new(text.as_str())
                .set("x", anchor.x)
                .set("y", anchor.y),
            class,
        ),
    };
    Some(node)
}

/// Serialize a scene into an SVG document string.
///
/// The document is `scene.width()` by `scene.height()` with a matching
/// `viewBox`, so scene coordinates are used unchanged.  An empty scene
/// yields a valid document with no shapes.
///
/// # Examples
///
/// ```
/// use tricanvas_core::{Point, Primitive, Scene, SceneElement, Surface};
/// use tricanvas_export::{SvgMetadata, to_svg};
///
/// let mut scene = Scene::new(200.0, 100.0);
/// scene.append(SceneElement::new(Primitive::triangle([
///     Point::new(50.0, 100.0),
///     Point::new(150.0, 100.0),
///     Point::new(50.0, 0.0),
/// ])));
/// let metadata = SvgMetadata {
///     title: Some("right triangle"),
///     ..SvgMetadata::default()
/// };
/// let svg = to_svg(&scene, &metadata);
/// assert!(svg.contains("<title>right triangle</title>"));
/// assert!(svg.contains("M50,100 L150,100 L50,0 z"));
/// ```
#[must_use]
pub fn to_svg(scene: &Scene, metadata: &SvgMetadata<'_>) -> String {
    let (w, h) = (scene.width(), scene.height());
    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0.0, 0.0, w, h));

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    if let Some(config_json) = metadata.config_json {
        let mut config_el = Element::new("tricanvas:config");
        config_el.assign("xmlns:tricanvas", METADATA_NAMESPACE);
        config_el.append(Text::new(config_json));
        let mut metadata_el = Element::new("metadata");
        metadata_el.append(config_el);
        doc = doc.add(metadata_el);
    }

    doc = doc.add(Style::new(STYLESHEET));

    let mut written = 0_usize;
    for node in scene.elements().iter().filter_map(element_node) {
        doc = doc.add(node);
        written += 1;
    }
    log::debug!("serialized {written} of {} scene elements", scene.len());

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tricanvas_core::{SceneRenderer, Visibility};

    use super::*;

    /// The document without line breaks, so text content compares
    /// regardless of how the `svg` crate wraps it.
    fn compact(svg: &str) -> String {
        svg.replace('\n', "")
    }

    fn tagged_scene() -> Scene {
        let mut renderer = SceneRenderer::new(Scene::new(100.0, 100.0), Visibility::default());
        renderer.render(vec![
            SceneElement::new(Primitive::triangle([
                Point::new(12.5, 100.0),
                Point::new(87.5, 100.0),
                Point::new(12.5, 0.0),
            ])),
            SceneElement::tagged(
                Primitive::cross(Point::new(37.5, 66.7), 5.0),
                Category::Centroid,
            ),
            SceneElement::tagged(
                Primitive::Circle {
                    center: Point::new(37.5, 75.0),
                    radius: 25.0,
                },
                Category::Incircle,
            ),
            SceneElement::tagged(
                Primitive::Circle {
                    center: Point::new(50.0, 50.0),
                    radius: 62.5,
                },
                Category::Circumcircle,
            ),
            SceneElement::new(Primitive::label(Point::new(12.5, 100.0), "A")),
        ]);
        renderer.into_surface()
    }

    #[test]
    fn document_has_declaration_and_size() {
        let svg = to_svg(&Scene::new(400.0, 300.0), &SvgMetadata::default());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"));
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="300""#));
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_scene_has_no_shapes() {
        let svg = to_svg(&Scene::new(400.0, 300.0), &SvgMetadata::default());
        assert!(svg.contains("<style>"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn every_primitive_kind_is_written() {
        let svg = compact(&to_svg(&tagged_scene(), &SvgMetadata::default()));
        assert!(svg.contains("M12.5,100 L87.5,100 L12.5,0 z"));
        assert!(svg.contains(r#"class="centroid""#));
        assert!(svg.contains(r#"cx="37.5""#));
        assert!(svg.contains(r#"r="62.5""#));
        assert!(svg.contains(">A</text>"));
    }

    #[test]
    fn category_classes_follow_draw_order() {
        let svg = to_svg(&tagged_scene(), &SvgMetadata::default());
        let centroid = svg.find(r#"class="centroid""#).unwrap();
        let incircle = svg.find(r#"class="incircle""#).unwrap();
        let circumcircle = svg.find(r#"class="circumcircle""#).unwrap();
        let label = svg.find("<text").unwrap();
        assert!(centroid < incircle && incircle < circumcircle && circumcircle < label);
    }

    #[test]
    fn hidden_elements_stay_in_document() {
        let mut renderer = SceneRenderer::new(tagged_scene(), Visibility::default());
        renderer.toggle(Category::Incircle, false);
        let svg = to_svg(renderer.surface(), &SvgMetadata::default());
        assert!(svg.contains(r#"class="incircle hidden""#));
        assert!(svg.contains(r#"class="circumcircle""#));
        assert!(svg.contains(".hidden { display: none; }"));
    }

    #[test]
    fn metadata_is_escaped() {
        let metadata = SvgMetadata {
            title: Some("a < b"),
            description: Some("side & angle"),
            config_json: Some(r#"{"width":400}"#),
        };
        let svg = compact(&to_svg(&Scene::new(10.0, 10.0), &metadata));
        assert!(svg.contains("<title>a &lt; b</title>"));
        assert!(svg.contains("<desc>side &amp; angle</desc>"));
        assert!(svg.contains("<metadata>"));
        assert!(svg.contains(r#"xmlns:tricanvas="urn:tricanvas:config""#));
    }

    #[test]
    fn degenerate_polygon_is_skipped() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.append(SceneElement::new(Primitive::Polygon(vec![Point::new(1.0, 1.0)])));
        assert!(!to_svg(&scene, &SvgMetadata::default()).contains("<path"));
    }

    #[test]
    fn cross_is_two_subpaths() {
        assert_eq!(
            build_cross_data(Point::new(0.0, 0.0), 2.0),
            "M-2,-2 L2,2 M-2,2 L2,-2"
        );
    }
}
