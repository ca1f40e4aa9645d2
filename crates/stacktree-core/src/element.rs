//! Template elements and their categories.
//!
//! An [`Element`] is the node key of the dependency graph: a name plus the
//! template section it was declared in. It carries no other payload.

use std::fmt;

use crate::identifier::Id;

/// The template section an element is declared in.
///
/// The set is closed: these are the only sections whose entries can take part
/// in references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Parameter,
    Resource,
    Output,
}

impl Category {
    /// All categories in rendering order.
    pub const ALL: [Category; 3] = [Category::Parameter, Category::Resource, Category::Output];

    /// Returns the template section name (`Parameters`, `Resources`, `Outputs`).
    pub fn section(&self) -> &'static str {
        match self {
            Category::Parameter => "Parameters",
            Category::Resource => "Resources",
            Category::Output => "Outputs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// A named, categorized node of the dependency graph.
///
/// Two elements are equal iff both the name and the category match.
///
/// # Examples
///
/// ```
/// use stacktree_core::{Category, Element};
///
/// let bucket = Element::resource("Bucket");
/// assert_eq!(bucket.category(), Category::Resource);
/// assert_eq!(bucket.to_string(), "Resources: Bucket");
/// assert_ne!(bucket, Element::output("Bucket"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    name: Id,
    category: Category,
}

impl Element {
    /// Creates an element with the given name and category.
    pub fn new(name: impl Into<Id>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Creates a `Parameters` element.
    pub fn parameter(name: &str) -> Self {
        Self::new(name, Category::Parameter)
    }

    /// Creates a `Resources` element.
    pub fn resource(name: &str) -> Self {
        Self::new(name, Category::Resource)
    }

    /// Creates an `Outputs` element.
    pub fn output(name: &str) -> Self {
        Self::new(name, Category::Output)
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Element {
    /// Formats as `<section>: <name>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.name)
    }
}
