//! Scene renderer: replace the contents of a render surface.
//!
//! A render is always clear-then-build.  The previous elements are
//! discarded unconditionally, the new elements are appended in a fixed
//! draw order, and the current [`Visibility`] is applied to them.  The
//! surface is borrowed mutably for the whole call, so no caller can
//! observe the cleared-but-not-yet-populated state.
//!
//! Draw order:
//!
//! 1. triangle outline
//! 2. centroid marker
//! 3. incircle marker and circle
//! 4. circumcircle marker and circle
//! 5. vertex labels (last, so they draw on top)

use serde::{Deserialize, Serialize};

use crate::primitive::Primitive;

/// Togglable element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Centroid,
    Incircle,
    Circumcircle,
}

impl Category {
    /// All togglable categories.
    pub const ALL: [Self; 3] = [Self::Centroid, Self::Incircle, Self::Circumcircle];

    /// Class name used to tag elements of this category.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
            Self::Incircle => "incircle",
            Self::Circumcircle => "circumcircle",
        }
    }
}

/// Per-category visibility state.
///
/// This is the explicit toggle context handed to the renderer; newly
/// built elements follow it instead of defaulting to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub centroid: bool,
    pub incircle: bool,
    pub circumcircle: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            centroid: true,
            incircle: true,
            circumcircle: true,
        }
    }
}

impl Visibility {
    /// Whether elements of `category` are shown.
    #[must_use]
    pub const fn is_visible(&self, category: Category) -> bool {
        match category {
            Category::Centroid => self.centroid,
            Category::Incircle => self.incircle,
            Category::Circumcircle => self.circumcircle,
        }
    }

    /// Show or hide `category`.
    pub const fn set(&mut self, category: Category, visible: bool) {
        match category {
            Category::Centroid => self.centroid = visible,
            Category::Incircle => self.incircle = visible,
            Category::Circumcircle => self.circumcircle = visible,
        }
    }
}

/// Position of an element in the draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DrawLayer {
    Outline,
    Centroid,
    Incircle,
    Circumcircle,
    Labels,
}

/// A primitive plus its scene bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    primitive: Primitive,
    category: Option<Category>,
    hidden: bool,
}

impl SceneElement {
    /// An element that is never hidden.
    #[must_use]
    pub const fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            category: None,
            hidden: false,
        }
    }

    /// An element tagged with a togglable category.
    #[must_use]
    pub const fn tagged(primitive: Primitive, category: Category) -> Self {
        Self {
            primitive,
            category: Some(category),
            hidden: false,
        }
    }

    /// The shape.
    #[must_use]
    pub const fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// The category tag, if any.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Whether the shared "hidden" marker is set.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set or clear the "hidden" marker.
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Where this element sits in the draw order.
    #[must_use]
    pub const fn layer(&self) -> DrawLayer {
        match (self.category, &self.primitive) {
            (Some(Category::Centroid), _) => DrawLayer::Centroid,
            (Some(Category::Incircle), _) => DrawLayer::Incircle,
            (Some(Category::Circumcircle), _) => DrawLayer::Circumcircle,
            (None, Primitive::Label { .. }) => DrawLayer::Labels,
            (None, _) => DrawLayer::Outline,
        }
    }
}

/// A rectangular target that scene elements are drawn onto.
pub trait Surface {
    /// Width in viewport units.
    fn width(&self) -> f64;

    /// Height in viewport units.
    fn height(&self) -> f64;

    /// Remove every element.
    fn clear(&mut self);

    /// Append one element on top of the existing ones.
    fn append(&mut self, element: SceneElement);

    /// Set or clear the "hidden" marker on every element tagged with
    /// `category`.
    fn set_category_hidden(&mut self, category: Category, hidden: bool);
}

/// Whether a surface currently holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneState {
    Empty,
    Populated,
}

/// An in-memory surface that keeps its elements in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    width: f64,
    height: f64,
    elements: Vec<SceneElement>,
}

impl Scene {
    /// An empty scene of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// All elements, bottom to top.
    #[must_use]
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Elements without the "hidden" marker, bottom to top.
    pub fn visible_elements(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter().filter(|e| !e.is_hidden())
    }

    /// Returns `true` if the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SceneState {
        if self.is_empty() {
            SceneState::Empty
        } else {
            SceneState::Populated
        }
    }
}

impl Surface for Scene {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn append(&mut self, element: SceneElement) {
        self.elements.push(element);
    }

    fn set_category_hidden(&mut self, category: Category, hidden: bool) {
        self.elements
            .iter_mut()
            .filter(|e| e.category() == Some(category))
            .for_each(|e| e.set_hidden(hidden));
    }
}

/// Apply `visibility` to every tagged element on `surface`.
pub fn apply_visibility<S: Surface + ?Sized>(surface: &mut S, visibility: &Visibility) {
    for category in Category::ALL {
        surface.set_category_hidden(category, !visibility.is_visible(category));
    }
}

/// Replace the contents of `surface` with `elements`.
///
/// Elements are appended in draw order (a stable sort by
/// [`SceneElement::layer`], so same-layer elements keep their relative
/// order) and then `visibility` is applied.  An empty `elements` list
/// leaves the surface empty.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    mut elements: Vec<SceneElement>,
    visibility: &Visibility,
) {
    surface.clear();
    elements.sort_by_key(SceneElement::layer);
    log::debug!("rendering {} scene elements", elements.len());
    for element in elements {
        surface.append(element);
    }
    apply_visibility(surface, visibility);
}

/// Owns a surface together with its visibility state.
#[derive(Debug, Clone)]
pub struct SceneRenderer<S> {
    surface: S,
    visibility: Visibility,
}

impl<S: Surface> SceneRenderer<S> {
    /// Wrap `surface` with the given initial visibility.
    pub const fn new(surface: S, visibility: Visibility) -> Self {
        Self {
            surface,
            visibility,
        }
    }

    /// The render surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the renderer and return the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current visibility state.
    pub const fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Replace the surface contents; see [`render`].
    pub fn render(&mut self, elements: Vec<SceneElement>) {
        render(&mut self.surface, elements, &self.visibility);
    }

    /// Remove everything from the surface.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Show or hide a category, updating elements already on the surface.
    pub fn toggle(&mut self, category: Category, visible: bool) {
        self.visibility.set(category, visible);
        self.surface.set_category_hidden(category, !visible);
    }
}
