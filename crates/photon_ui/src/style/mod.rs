//! Pure class-string resolution: registries, effect composition, and per-component resolvers.
//!
//! Nothing in this module touches the reactive runtime, so every rule is unit-testable on the
//! host target.

mod effects;
mod registry;
mod resolve;

pub use effects::EffectFlags;
pub use registry::TransitionClasses;
pub use resolve::{ButtonStyle, CardStyle, FieldStatus, FieldStyle, ModalStyle};

/// Ordered, de-duplicated class accumulator.
///
/// Fragments are split on whitespace; empty fragments and classes already present are skipped,
/// so the first occurrence fixes a class's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every class in `fragment`.
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        for class in fragment.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, fragment: &str) -> &mut Self {
        if condition {
            self.push(fragment);
        }
        self
    }

    /// Appends an optional caller fragment.
    pub fn push_opt(&mut self, fragment: Option<&str>) -> &mut Self {
        if let Some(fragment) = fragment {
            self.push(fragment);
        }
        self
    }

    /// Whether `class` is already present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class has been pushed.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Joins the classes with single spaces.
    pub fn finish(&self) -> String {
        self.classes.join(" ")
    }
}
