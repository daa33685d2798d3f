//! Binary relationships between classes.

use std::{fmt, str::FromStr};

use crate::model::{ClassId, ElementKind, UmlClass, element::ElementMeta, element::impl_uml_element};

/// Kind of a relationship.
///
/// The string forms match the relationship type names used by the diagram
/// editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Bidirectional,
    Unidirectional,
    Inheritance,
    Realization,
    Dependency,
    Aggregation,
    Composition,
}

impl RelationshipKind {
    /// Returns `true` for kinds without a direction, whose ends may be swapped
    /// without changing their meaning.
    pub fn is_undirected(self) -> bool {
        matches!(self, RelationshipKind::Bidirectional)
    }
}

impl FromStr for RelationshipKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ClassBidirectional" => Ok(Self::Bidirectional),
            "ClassUnidirectional" => Ok(Self::Unidirectional),
            "ClassInheritance" => Ok(Self::Inheritance),
            "ClassRealization" => Ok(Self::Realization),
            "ClassDependency" => Ok(Self::Dependency),
            "ClassAggregation" => Ok(Self::Aggregation),
            "ClassComposition" => Ok(Self::Composition),
            _ => Err("Unsupported relationship kind"),
        }
    }
}

impl From<RelationshipKind> for &'static str {
    fn from(val: RelationshipKind) -> Self {
        match val {
            RelationshipKind::Bidirectional => "ClassBidirectional",
            RelationshipKind::Unidirectional => "ClassUnidirectional",
            RelationshipKind::Inheritance => "ClassInheritance",
            RelationshipKind::Realization => "ClassRealization",
            RelationshipKind::Dependency => "ClassDependency",
            RelationshipKind::Aggregation => "ClassAggregation",
            RelationshipKind::Composition => "ClassComposition",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A binary relationship between two classes of the same diagram.
///
/// Endpoints are [`ClassId`] handles into the owning diagram; the diagram
/// owns the classes. Roles and multiplicities are optional, and an empty
/// string is treated the same as an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmlRelationship {
    source: ClassId,
    target: ClassId,
    relationship_kind: RelationshipKind,
    source_role: Option<String>,
    target_role: Option<String>,
    source_multiplicity: Option<String>,
    target_multiplicity: Option<String>,
    meta: ElementMeta,
}

impl UmlRelationship {
    /// Create a relationship of a fixed kind between two classes.
    pub fn new(source: ClassId, target: ClassId, relationship_kind: RelationshipKind) -> Self {
        Self {
            source,
            target,
            relationship_kind,
            source_role: None,
            target_role: None,
            source_multiplicity: None,
            target_multiplicity: None,
            meta: ElementMeta::default(),
        }
    }

    pub fn with_source_role(mut self, role: impl Into<String>) -> Self {
        self.source_role = Some(role.into());
        self
    }

    pub fn with_target_role(mut self, role: impl Into<String>) -> Self {
        self.target_role = Some(role.into());
        self
    }

    pub fn with_source_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.source_multiplicity = Some(multiplicity.into());
        self
    }

    pub fn with_target_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.target_multiplicity = Some(multiplicity.into());
        self
    }

    pub fn source(&self) -> ClassId {
        self.source
    }

    pub fn target(&self) -> ClassId {
        self.target
    }

    pub fn relationship_kind(&self) -> RelationshipKind {
        self.relationship_kind
    }

    pub fn source_role(&self) -> Option<&str> {
        self.source_role.as_deref()
    }

    pub fn target_role(&self) -> Option<&str> {
        self.target_role.as_deref()
    }

    pub fn source_multiplicity(&self) -> Option<&str> {
        self.source_multiplicity.as_deref()
    }

    pub fn target_multiplicity(&self) -> Option<&str> {
        self.target_multiplicity.as_deref()
    }
}

impl_uml_element!(UmlRelationship, ElementKind::Relationship);

/// A relationship borrowed together with its resolved endpoint classes.
///
/// Only [`UmlDiagram`](crate::model::UmlDiagram) hands these out, after it has
/// validated both endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipRef<'d> {
    relationship: &'d UmlRelationship,
    source: &'d UmlClass,
    target: &'d UmlClass,
}

impl<'d> RelationshipRef<'d> {
    pub(crate) fn new(
        relationship: &'d UmlRelationship,
        source: &'d UmlClass,
        target: &'d UmlClass,
    ) -> Self {
        Self {
            relationship,
            source,
            target,
        }
    }

    pub fn relationship(&self) -> &'d UmlRelationship {
        self.relationship
    }

    /// The resolved source class.
    pub fn source(&self) -> &'d UmlClass {
        self.source
    }

    /// The resolved target class.
    pub fn target(&self) -> &'d UmlClass {
        self.target
    }
}

impl fmt::Display for RelationshipRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source.name(),
            self.relationship.relationship_kind,
            self.target.name()
        )
    }
}
