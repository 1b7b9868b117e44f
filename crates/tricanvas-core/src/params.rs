//! Parameter reader: turns raw form fields into solver input.
//!
//! Form fields arrive as `(id, value)` string pairs.  Fields with an
//! empty value are dropped entirely, so a solver never sees a key it
//! has no value for.
//!
//! The three-point solver groups fields per vertex: the first character
//! of the field id (uppercased) selects vertex `A`, `B` or `C`, and the
//! second character names the field within that vertex (`ax` is the x
//! coordinate of `A`).  A field named `mode` is kept separately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::solution::AngleMode;
use crate::types::Point;

/// Field id carrying the angle unit.
pub const MODE_FIELD: &str = "mode";

/// An ordered map from field id to non-empty raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    /// Create an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a field, ignoring empty values.
    ///
    /// A later value for the same id replaces the earlier one.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(id.into(), value);
        }
    }

    /// The raw value for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Returns `true` if `id` has a value.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of fields with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, value) in iter {
            map.insert(id, value);
        }
        map
    }
}

/// Collect raw form fields into solver parameters, dropping empty values.
///
/// # Examples
///
/// ```
/// use tricanvas_core::params::read_parameters;
///
/// let params = read_parameters([("a", "3"), ("b", ""), ("alpha", "60")]);
/// assert_eq!(params.get("a"), Some("3"));
/// assert!(!params.contains("b"));
/// assert_eq!(params.len(), 2);
/// ```
#[must_use]
pub fn read_parameters<I, K, V>(fields: I) -> FieldMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    fields.into_iter().collect()
}

/// One of the three triangle vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// All vertices in solver order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Resolve a field-id prefix character (case-insensitive).
    #[must_use]
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            _ => None,
        }
    }
}

/// Input for the three-point solver: one field map per vertex plus an
/// optional angle unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointParams {
    /// Fields of vertex `A`.
    pub a: FieldMap,
    /// Fields of vertex `B`.
    pub b: FieldMap,
    /// Fields of vertex `C`.
    pub c: FieldMap,
    /// Raw `mode` value, when one was given.
    pub mode: Option<String>,
}

impl PointParams {
    /// The fields of one vertex.
    #[must_use]
    pub const fn vertex(&self, vertex: Vertex) -> &FieldMap {
        match vertex {
            Vertex::A => &self.a,
            Vertex::B => &self.b,
            Vertex::C => &self.c,
        }
    }

    const fn vertex_mut(&mut self, vertex: Vertex) -> &mut FieldMap {
        match vertex {
            Vertex::A => &mut self.a,
            Vertex::B => &mut self.b,
            Vertex::C => &mut self.c,
        }
    }

    /// Build solver input from already-known coordinates.
    ///
    /// Used to feed reconstructed vertices back into the three-point
    /// solver.  Coordinates are formatted with Rust's shortest
    /// round-trip representation, so the solver parses back the exact
    /// same `f64` values.
    #[must_use]
    pub fn from_vertices(vertices: [Point; 3], mode: AngleMode) -> Self {
        let mut params = Self {
            mode: Some(mode.as_field().to_owned()),
            ..Self::default()
        };
        for (vertex, point) in Vertex::ALL.into_iter().zip(vertices) {
            let fields = params.vertex_mut(vertex);
            fields.insert("x", point.x.to_string());
            fields.insert("y", point.y.to_string());
        }
        params
    }
}

/// Errors from grouping three-point form fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ParamError {
    /// The field id does not start with `a`, `b` or `c`.
    #[error("field `{0}` does not name vertex A, B or C")]
    UnknownPoint(String),

    /// The field id has no second character naming the field.
    #[error("field `{0}` does not name a vertex field")]
    MalformedFieldId(String),
}

/// Group raw form fields by vertex for the three-point solver.
///
/// Empty values are skipped before the id is inspected, so an unused
/// field never causes an error.  Only the first two characters of an id
/// are significant.
///
/// # Errors
///
/// Returns [`ParamError::UnknownPoint`] when a non-empty field's first
/// character is not `a`, `b` or `c` (either case), and
/// [`ParamError::MalformedFieldId`] when the id has no second character.
pub fn read_point_parameters<I, K, V>(fields: I) -> Result<PointParams, ParamError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut params = PointParams::default();
    for (id, value) in fields {
        let id = id.as_ref();
        let value = value.into();
        if value.is_empty() {
            continue;
        }
        if id == MODE_FIELD {
            params.mode = Some(value);
            continue;
        }

        let mut chars = id.chars();
        let vertex = chars
            .next()
            .and_then(Vertex::from_prefix)
            .ok_or_else(|| ParamError::UnknownPoint(id.to_owned()))?;
        let field = chars
            .next()
            .ok_or_else(|| ParamError::MalformedFieldId(id.to_owned()))?;
        params.vertex_mut(vertex).insert(field, value);
    }
    Ok(params)
}
