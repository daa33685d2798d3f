//! The diagram owning all elements, its builder, and element lookup.

use std::fmt;

use log::{debug, trace};

use crate::{
    error::ModelError,
    model::{
        Element, ElementIndex, ElementLocation, RelationshipRef, SimilarityClass, UmlClass,
        UmlElement, UmlPackage, UmlRelationship,
    },
};

/// Handle to a class inside one [`UmlDiagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    /// Position of the class in [`UmlDiagram::classes`].
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a package inside one [`UmlDiagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub(crate) usize);

impl PackageId {
    /// Position of the package in [`UmlDiagram::packages`].
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a relationship inside one [`UmlDiagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipId(pub(crate) usize);

impl RelationshipId {
    /// Position of the relationship in the diagram.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A class diagram: the sole owner of every class, relationship and package.
///
/// Elements are immutable once the diagram is built, except for their
/// similarity classes, which the clustering step records through
/// [`UmlDiagram::set_similarity_class`].
///
/// # Examples
///
/// ```
/// use compass_core::model::{
///     ClassKind, RelationshipKind, UmlAttribute, UmlClass, UmlDiagram, UmlRelationship,
/// };
///
/// let mut builder = UmlDiagram::builder();
/// let person = builder.add_class(
///     UmlClass::new("Person", ClassKind::Class)
///         .with_attribute(UmlAttribute::new("name", "String").with_external_id("attr-name")),
/// );
/// let address = builder.add_class(UmlClass::new("Address", ClassKind::Class));
/// builder
///     .add_relationship(UmlRelationship::new(person, address, RelationshipKind::Composition))
///     .expect("both classes are part of the diagram");
///
/// let diagram = builder.build();
/// let element = diagram.element_by_external_id("attr-name").expect("attribute exists");
/// assert_eq!(element.name(), "name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UmlDiagram {
    classes: Vec<UmlClass>,
    relationships: Vec<UmlRelationship>,
    packages: Vec<UmlPackage>,
    index: ElementIndex,
}

impl UmlDiagram {
    /// Start assembling a diagram.
    pub fn builder() -> DiagramBuilder {
        DiagramBuilder::default()
    }

    pub fn classes(&self) -> &[UmlClass] {
        &self.classes
    }

    pub fn class(&self, id: ClassId) -> Option<&UmlClass> {
        self.classes.get(id.0)
    }

    pub fn packages(&self) -> &[UmlPackage] {
        &self.packages
    }

    pub fn package(&self, id: PackageId) -> Option<&UmlPackage> {
        self.packages.get(id.0)
    }

    /// Number of relationships in the diagram.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Borrow a relationship with its endpoints resolved.
    pub fn relationship(&self, id: RelationshipId) -> Option<RelationshipRef<'_>> {
        self.relationships
            .get(id.0)
            .and_then(|relationship| self.resolve(relationship))
    }

    /// Iterate over all relationships with their endpoints resolved.
    pub fn relationships(&self) -> impl Iterator<Item = RelationshipRef<'_>> {
        self.relationships
            .iter()
            .filter_map(move |relationship| self.resolve(relationship))
    }

    /// The external-id index built with the diagram.
    pub fn index(&self) -> &ElementIndex {
        &self.index
    }

    /// Iterate over the location of every element.
    ///
    /// Order: each class followed by its attributes and then its methods,
    /// then all relationships, then all packages.
    pub fn locations(&self) -> impl Iterator<Item = ElementLocation> + '_ {
        let members = self.classes.iter().enumerate().flat_map(|(index, class)| {
            let id = ClassId(index);
            let attributes =
                (0..class.attributes().len()).map(move |i| ElementLocation::Attribute(id, i));
            let methods = (0..class.methods().len()).map(move |i| ElementLocation::Method(id, i));
            std::iter::once(ElementLocation::Class(id))
                .chain(attributes)
                .chain(methods)
        });
        let relationships = (0..self.relationships.len())
            .map(|index| ElementLocation::Relationship(RelationshipId(index)));
        let packages =
            (0..self.packages.len()).map(|index| ElementLocation::Package(PackageId(index)));
        members.chain(relationships).chain(packages)
    }

    /// Borrow the element at `location`, or `None` if nothing lives there.
    pub fn element(&self, location: ElementLocation) -> Option<Element<'_>> {
        match location {
            ElementLocation::Class(id) => self.class(id).map(Element::Class),
            ElementLocation::Attribute(id, index) => self
                .class(id)
                .and_then(|class| class.attribute(index))
                .map(Element::Attribute),
            ElementLocation::Method(id, index) => self
                .class(id)
                .and_then(|class| class.method(index))
                .map(Element::Method),
            ElementLocation::Relationship(id) => self.relationship(id).map(Element::Relationship),
            ElementLocation::Package(id) => self.package(id).map(Element::Package),
        }
    }

    /// Iterate over every element of the diagram, in
    /// [`UmlDiagram::locations`] order.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        self.locations()
            .filter_map(move |location| self.element(location))
    }

    /// Location of the first element carrying the given tool-assigned
    /// identifier.
    pub fn locate(&self, external_id: &str) -> Option<ElementLocation> {
        let location = self.index.get(external_id);
        if location.is_none() {
            trace!(external_id; "Identifier not used by this diagram");
        }
        location
    }

    /// Find the first element carrying the given tool-assigned identifier.
    ///
    /// Resolves in [`UmlDiagram::elements`] order through the index built
    /// with the diagram.
    pub fn element_by_external_id(&self, external_id: &str) -> Option<Element<'_>> {
        self.locate(external_id)
            .and_then(|location| self.element(location))
    }

    /// Record the cluster the element at `location` was grouped into.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if nothing lives at `location`.
    pub fn set_similarity_class(
        &mut self,
        location: ElementLocation,
        similarity_class: SimilarityClass,
    ) -> Result<(), ModelError> {
        let assigned = match location {
            ElementLocation::Class(id) => self
                .classes
                .get_mut(id.0)
                .map(|class| class.set_similarity_class(similarity_class)),
            ElementLocation::Attribute(id, index) => self
                .classes
                .get_mut(id.0)
                .and_then(|class| class.attribute_mut(index))
                .map(|attribute| attribute.set_similarity_class(similarity_class)),
            ElementLocation::Method(id, index) => self
                .classes
                .get_mut(id.0)
                .and_then(|class| class.method_mut(index))
                .map(|method| method.set_similarity_class(similarity_class)),
            ElementLocation::Relationship(id) => self
                .relationships
                .get_mut(id.0)
                .map(|relationship| relationship.set_similarity_class(similarity_class)),
            ElementLocation::Package(id) => self
                .packages
                .get_mut(id.0)
                .map(|package| package.set_similarity_class(similarity_class)),
        };
        assigned.ok_or(ModelError::UnknownElement(location))
    }

    fn resolve<'d>(&'d self, relationship: &'d UmlRelationship) -> Option<RelationshipRef<'d>> {
        let source = self.classes.get(relationship.source().0)?;
        let target = self.classes.get(relationship.target().0)?;
        Some(RelationshipRef::new(relationship, source, target))
    }
}

/// Assembles a [`UmlDiagram`], validating every cross-element reference.
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    classes: Vec<UmlClass>,
    relationships: Vec<UmlRelationship>,
    packages: Vec<UmlPackage>,
}

impl DiagramBuilder {
    /// Add a class and return its handle.
    ///
    /// Any package back-reference carried over from another diagram is
    /// cleared; membership is established through [`DiagramBuilder::add_package`].
    pub fn add_class(&mut self, mut class: UmlClass) -> ClassId {
        class.clear_package();
        let id = ClassId(self.classes.len());
        self.classes.push(class);
        id
    }

    /// Add a relationship between two classes already added to this builder.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownClass`] if either endpoint is not part of
    /// the diagram.
    pub fn add_relationship(
        &mut self,
        relationship: UmlRelationship,
    ) -> Result<RelationshipId, ModelError> {
        self.check_class(relationship.source())?;
        self.check_class(relationship.target())?;

        let id = RelationshipId(self.relationships.len());
        self.relationships.push(relationship);
        Ok(id)
    }

    /// Add a package and point each member class back at it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownClass`] for a member that is not part of
    /// the diagram and [`ModelError::ClassAlreadyInPackage`] for a member
    /// registered with another package. On error nothing is modified.
    pub fn add_package(&mut self, package: UmlPackage) -> Result<PackageId, ModelError> {
        for &class_id in package.classes() {
            self.check_class(class_id)?;
            if let Some(existing) = self.classes[class_id.0].package() {
                return Err(ModelError::ClassAlreadyInPackage {
                    class: class_id,
                    package: existing,
                });
            }
        }

        let id = PackageId(self.packages.len());
        for &class_id in package.classes() {
            self.classes[class_id.0].set_package(id);
        }
        self.packages.push(package);
        Ok(id)
    }

    /// Finish the diagram.
    pub fn build(self) -> UmlDiagram {
        debug!(
            classes = self.classes.len(),
            relationships = self.relationships.len(),
            packages = self.packages.len();
            "Diagram built"
        );
        let mut diagram = UmlDiagram {
            classes: self.classes,
            relationships: self.relationships,
            packages: self.packages,
            index: ElementIndex::default(),
        };
        let index = ElementIndex::new(diagram.locations().filter_map(|location| {
            diagram
                .element(location)
                .and_then(|element| element.external_id())
                .map(|external_id| (external_id, location))
        }));
        debug!(indexed = index.len(); "Element index built");
        diagram.index = index;
        diagram
    }

    fn check_class(&self, id: ClassId) -> Result<(), ModelError> {
        if id.0 < self.classes.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownClass(id))
        }
    }
}
