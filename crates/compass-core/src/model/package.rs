//! Packages grouping classes.

use crate::model::{ClassId, ElementKind, element::ElementMeta, element::impl_uml_element};

/// A named package and the classes registered with it.
///
/// The package holds the membership list; classes only keep a back-reference
/// to the package, set by
/// [`DiagramBuilder::add_package`](crate::model::diagram::DiagramBuilder::add_package).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmlPackage {
    name: String,
    classes: Vec<ClassId>,
    meta: ElementMeta,
}

impl UmlPackage {
    /// Create a package with its member classes.
    pub fn new(name: impl Into<String>, classes: impl IntoIterator<Item = ClassId>) -> Self {
        Self {
            name: name.into(),
            classes: classes.into_iter().collect(),
            meta: ElementMeta::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classes registered with this package.
    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }
}

impl_uml_element!(UmlPackage, ElementKind::Package);
