//! Element kinds, similarity classes, and the borrowed [`Element`] handle.

use std::{borrow::Cow, fmt};

use crate::model::{MemberRef, RelationshipRef, UmlAttribute, UmlClass, UmlMethod, UmlPackage};

/// Kind tag shared by every element of a class diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Attribute,
    Method,
    Package,
    Relationship,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Class => "class",
            ElementKind::Attribute => "attribute",
            ElementKind::Method => "method",
            ElementKind::Package => "package",
            ElementKind::Relationship => "relationship",
        };
        write!(f, "{name}")
    }
}

/// Cluster membership assigned by the clustering step.
///
/// Elements start out `Unassigned`. Once the clustering collaborator has
/// grouped an element with equivalent elements from other submissions it
/// stores the cluster id here. The scoring engine only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SimilarityClass {
    #[default]
    Unassigned,
    Assigned(u32),
}

impl SimilarityClass {
    /// Returns the cluster id if one has been assigned.
    pub fn id(self) -> Option<u32> {
        match self {
            SimilarityClass::Assigned(id) => Some(id),
            SimilarityClass::Unassigned => None,
        }
    }

    /// Returns `true` if a cluster id has been assigned.
    pub fn is_assigned(self) -> bool {
        matches!(self, SimilarityClass::Assigned(_))
    }

    /// Decides identity from cluster ids alone.
    ///
    /// Returns `Some(true)`/`Some(false)` when both sides are assigned, and
    /// `None` when at least one side still needs to be scored.
    pub fn same_cluster(self, other: SimilarityClass) -> Option<bool> {
        match (self, other) {
            (SimilarityClass::Assigned(a), SimilarityClass::Assigned(b)) => Some(a == b),
            _ => None,
        }
    }
}

/// Metadata every element carries besides its own content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ElementMeta {
    pub(crate) external_id: Option<String>,
    pub(crate) similarity_class: SimilarityClass,
}

/// Capabilities shared by all owned element types.
pub trait UmlElement {
    /// The kind tag of this element.
    fn kind(&self) -> ElementKind;

    /// Identifier assigned by the authoring tool, if any.
    fn external_id(&self) -> Option<&str>;

    /// Cluster membership assigned by the clustering step.
    fn similarity_class(&self) -> SimilarityClass;

    /// Records the cluster this element was grouped into.
    fn set_similarity_class(&mut self, similarity_class: SimilarityClass);
}

/// Implements [`UmlElement`] and the external id builder for a type with a
/// `meta: ElementMeta` field.
macro_rules! impl_uml_element {
    ($ty:ty, $kind:expr) => {
        impl $crate::model::UmlElement for $ty {
            fn kind(&self) -> $crate::model::ElementKind {
                $kind
            }

            fn external_id(&self) -> Option<&str> {
                self.meta.external_id.as_deref()
            }

            fn similarity_class(&self) -> $crate::model::SimilarityClass {
                self.meta.similarity_class
            }

            fn set_similarity_class(&mut self, similarity_class: $crate::model::SimilarityClass) {
                self.meta.similarity_class = similarity_class;
            }
        }

        impl $ty {
            /// Attach the identifier assigned by the authoring tool.
            pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
                self.meta.external_id = Some(external_id.into());
                self
            }

            /// Attach an already known cluster membership.
            pub fn with_similarity_class(
                mut self,
                similarity_class: $crate::model::SimilarityClass,
            ) -> Self {
                self.meta.similarity_class = similarity_class;
                self
            }
        }
    };
}

pub(crate) use impl_uml_element;

/// A borrowed element of any kind, resolved against its diagram.
///
/// Members carry their owning class and relationships carry their resolved
/// endpoints, so the scoring engine never has to look anything up.
#[derive(Debug, Clone, Copy)]
pub enum Element<'d> {
    Class(&'d UmlClass),
    Attribute(MemberRef<'d, UmlAttribute>),
    Method(MemberRef<'d, UmlMethod>),
    Package(&'d UmlPackage),
    Relationship(RelationshipRef<'d>),
}

impl<'d> Element<'d> {
    /// Get the kind tag of the element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Class(_) => ElementKind::Class,
            Element::Attribute(_) => ElementKind::Attribute,
            Element::Method(_) => ElementKind::Method,
            Element::Package(_) => ElementKind::Package,
            Element::Relationship(_) => ElementKind::Relationship,
        }
    }

    /// Human-readable name of the element.
    ///
    /// Relationships have no name of their own and are described by their
    /// endpoints and kind instead. That description is formatted on every
    /// call.
    pub fn name(&self) -> Cow<'d, str> {
        match *self {
            Element::Class(class) => Cow::Borrowed(class.name()),
            Element::Attribute(attribute) => Cow::Borrowed(attribute.member().name()),
            Element::Method(method) => Cow::Borrowed(method.member().name()),
            Element::Package(package) => Cow::Borrowed(package.name()),
            Element::Relationship(relationship) => Cow::Owned(relationship.to_string()),
        }
    }

    /// Identifier assigned by the authoring tool, if any.
    pub fn external_id(&self) -> Option<&'d str> {
        match *self {
            Element::Class(class) => class.external_id(),
            Element::Attribute(attribute) => attribute.member().external_id(),
            Element::Method(method) => method.member().external_id(),
            Element::Package(package) => package.external_id(),
            Element::Relationship(relationship) => relationship.relationship().external_id(),
        }
    }

    /// Cluster membership assigned by the clustering step.
    pub fn similarity_class(&self) -> SimilarityClass {
        match *self {
            Element::Class(class) => class.similarity_class(),
            Element::Attribute(attribute) => attribute.member().similarity_class(),
            Element::Method(method) => method.member().similarity_class(),
            Element::Package(package) => package.similarity_class(),
            Element::Relationship(relationship) => relationship.relationship().similarity_class(),
        }
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.name())
    }
}
