//! tricanvas-export: Pure format serializers (sans-IO)
//!
//! Converts a rendered [`Scene`](tricanvas_core::Scene) into an SVG
//! document and solver output into JSON.

pub mod json;
pub mod svg;

pub use json::{ExportError, config_metadata_json, to_pretty_json};
pub use svg::{SvgMetadata, build_cross_data, build_polygon_data, to_svg};
