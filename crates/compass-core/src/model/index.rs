//! Element handles and the per-diagram external-id index.

use indexmap::IndexMap;

use crate::{
    identifier::{Id, Identifiers},
    model::{ClassId, PackageId, RelationshipId},
};

/// Handle to any element of one [`UmlDiagram`](crate::model::UmlDiagram).
///
/// Members are addressed by their owning class and their position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementLocation {
    Class(ClassId),
    Attribute(ClassId, usize),
    Method(ClassId, usize),
    Relationship(RelationshipId),
    Package(PackageId),
}

/// Maps the external identifiers of one diagram to element locations.
///
/// Built once by [`DiagramBuilder::build`](crate::model::DiagramBuilder::build)
/// and owned by the diagram, together with the identifiers it interned. When
/// several elements share an identifier the first in
/// [`UmlDiagram::elements`](crate::model::UmlDiagram::elements) order wins.
/// Iteration follows that order too.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    identifiers: Identifiers,
    locations: IndexMap<Id, ElementLocation>,
}

impl ElementIndex {
    /// Index `(external id, location)` pairs, given in element order.
    pub(crate) fn new<'a>(entries: impl IntoIterator<Item = (&'a str, ElementLocation)>) -> Self {
        let mut identifiers = Identifiers::default();
        let mut locations = IndexMap::new();
        for (external_id, location) in entries {
            let id = identifiers.intern(external_id);
            locations.entry(id).or_insert(location);
        }
        Self {
            identifiers,
            locations,
        }
    }

    /// Resolve an external identifier.
    pub fn get(&self, external_id: &str) -> Option<ElementLocation> {
        let id = self.identifiers.get(external_id)?;
        self.locations.get(&id).copied()
    }

    /// Number of distinct external identifiers.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over `(external id, location)` pairs in diagram order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ElementLocation)> + '_ {
        self.locations.iter().filter_map(|(id, location)| {
            self.identifiers
                .resolve(*id)
                .map(|external_id| (external_id, *location))
        })
    }
}
