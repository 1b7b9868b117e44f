//! tricanvas: Solve a triangle from form-style fields and draw it.
//!
//! Runs the reference solver on `id=value` fields, fits the solution
//! into a fixed-size viewport and writes the scene as SVG.
//!
//! # Usage
//!
//! ```text
//! tricanvas solve -i a=3 -i b=4 -i gamma=90 --svg triangle.svg
//! tricanvas points -i ax=0 -i ay=0 -i bx=4 -i by=0 -i cx=1 -i cy=3 --json
//! ```
//!
//! Set `RUST_LOG=debug` to see the viewport transform.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tricanvas_core::{
    Category, CircleSource, PointsSolver, RenderConfig, Scene, SceneRenderer, TriangleSolver,
    Visibility, read_parameters, read_point_parameters,
};
use tricanvas_export::{SvgMetadata, config_metadata_json, to_pretty_json, to_svg};
use tricanvas_solver::ReferenceSolver;

/// Solve a triangle and draw it into a fixed-size SVG viewport.
#[derive(Parser)]
#[command(name = "tricanvas", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve from sides `a b c`, angles `alpha beta gamma` and `mode`.
    Solve(RenderArgs),
    /// Solve from vertex coordinates `ax ay bx by cx cy` and `mode`.
    Points(RenderArgs),
}

/// Arguments shared by both subcommands.
#[derive(Args)]
struct RenderArgs {
    /// Form field as `id=value`; repeat for each field.
    #[arg(short, long = "input", value_name = "ID=VALUE", value_parser = parse_field)]
    inputs: Vec<(String, String)>,

    /// Viewport width.
    #[arg(long, default_value_t = RenderConfig::DEFAULT_WIDTH)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = RenderConfig::DEFAULT_HEIGHT)]
    height: f64,

    /// Half-length of the cross markers.
    #[arg(long, default_value_t = RenderConfig::DEFAULT_CROSS_HALF_LENGTH)]
    cross_half_length: f64,

    /// Hide a category initially; repeat to hide several.
    #[arg(long, value_enum)]
    hide: Vec<Toggle>,

    /// Where side/angle drawings take their circle radii from.
    #[arg(long, value_enum, default_value_t = Radii::SideAngle)]
    circle_source: Radii,

    /// Full render config as a JSON string.
    ///
    /// When provided, all other render flags are ignored.  The JSON must
    /// be a valid `RenderConfig` serialization; missing keys take their
    /// defaults.
    #[arg(long)]
    config_json: Option<String>,

    /// Write SVG output to file instead of stdout.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the solver output as JSON instead of the SVG.
    #[arg(long)]
    json: bool,

    /// Document title embedded in the SVG.
    #[arg(long)]
    title: Option<String>,
}

/// Togglable category selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Toggle {
    Centroid,
    Incircle,
    Circumcircle,
}

impl Toggle {
    const fn category(self) -> Category {
        match self {
            Self::Centroid => Category::Centroid,
            Self::Incircle => Category::Incircle,
            Self::Circumcircle => Category::Circumcircle,
        }
    }
}

/// Circle radius source selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Radii {
    /// Radii reported by the side/angle solver.
    SideAngle,
    /// Radii recomputed from the reconstructed vertices.
    PointSolver,
}

/// Parse one `id=value` form field.
fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got {raw:?}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing field id in {raw:?}"));
    }
    Ok((id.to_owned(), value.trim().to_owned()))
}

/// Build and validate a [`RenderConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and all
/// individual render flags are ignored.  A viewport that is not
/// positive and finite is rejected before anything is solved.
fn config_from_args(args: &RenderArgs) -> Result<RenderConfig, String> {
    let config = parse_config(args)?;
    config
        .validate()
        .map_err(|e| format!("Error in render config: {e}"))?;
    Ok(config)
}

fn parse_config(args: &RenderArgs) -> Result<RenderConfig, String> {
    if let Some(ref json) = args.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    let mut visibility = Visibility::default();
    for toggle in &args.hide {
        visibility.set(toggle.category(), false);
    }

    Ok(RenderConfig {
        width: args.width,
        height: args.height,
        cross_half_length: args.cross_half_length,
        circle_source: match args.circle_source {
            Radii::SideAngle => CircleSource::SideAngle,
            Radii::PointSolver => CircleSource::PointSolver,
        },
        visibility,
        ..RenderConfig::default()
    })
}

/// Solve, draw and return the scene plus the solver output as JSON.
fn run(command: &Command, config: &RenderConfig) -> Result<(Scene, String, usize), String> {
    let mut renderer = SceneRenderer::new(Scene::new(config.width, config.height), config.visibility);
    let (json, solutions) = match command {
        Command::Solve(args) => {
            let output = ReferenceSolver.solve(&read_parameters(args.inputs.iter().cloned()));
            renderer
                .draw_side_angle(&output, &ReferenceSolver, config)
                .map_err(|e| format!("Render error: {e}"))?;
            (to_pretty_json(&output), output.solutions.len())
        }
        Command::Points(args) => {
            let params = read_point_parameters(args.inputs.iter().cloned())
                .map_err(|e| format!("Input error: {e}"))?;
            let output = ReferenceSolver.solve_points(&params);
            renderer
                .draw_points(&output, config)
                .map_err(|e| format!("Render error: {e}"))?;
            (to_pretty_json(&output), output.solutions.len())
        }
    };
    let json = json.map_err(|e| format!("Error serializing solver output: {e}"))?;
    Ok((renderer.into_surface(), json, solutions))
}

const fn render_args(command: &Command) -> &RenderArgs {
    match command {
        Command::Solve(args) | Command::Points(args) => args,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let args = render_args(&cli.command);

    let config = match config_from_args(args) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("render config: {config:?}");

    let (scene, json, solutions) = match run(&cli.command, &config) {
        Ok(result) => result,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    if solutions == 0 {
        eprintln!("No solution; the drawing is empty.");
    } else {
        eprintln!(
            "{solutions} solution(s), {} scene element(s)",
            scene.len()
        );
    }

    if args.json {
        println!("{json}");
    }

    let config_json = match config_metadata_json(&config) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let description = format!("{solutions} solution(s)");
    let metadata = SvgMetadata {
        title: args.title.as_deref(),
        description: Some(&description),
        config_json: Some(&config_json),
    };
    let svg = to_svg(&scene, &metadata);

    match args.svg {
        Some(ref svg_path) => match std::fs::write(svg_path, &svg) {
            Ok(()) => {
                eprintln!(
                    "SVG written to {} ({} bytes)",
                    svg_path.display(),
                    svg.len(),
                );
            }
            Err(e) => {
                eprintln!("Error writing SVG to {}: {e}", svg_path.display());
                return ExitCode::FAILURE;
            }
        },
        None if !args.json => print!("{svg}"),
        None => {}
    }

    ExitCode::SUCCESS
}
