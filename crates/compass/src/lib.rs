//! Compass - Similarity scoring for UML class-diagram elements.
//!
//! Compass compares the elements of two class diagrams (classes, attributes,
//! methods, packages, and relationships) and produces a similarity score in
//! `[0, 1]` for every comparable pair. Scores drive the semi-automatic
//! assessment of modeling exercises: elements that score as equivalent across
//! submissions can share a single tutor judgment.
//!
//! All scoring is pure and synchronous. The element model lives in
//! [`compass_core`] and is re-exported here as [`model`].

pub mod config;
pub mod name;

mod aggregate;
mod error;
mod similarity;

pub use compass_core::{ModelError, identifier, model};

pub use error::CompassError;

use log::{trace, warn};

use compass_core::model::{
    Element, MemberRef, RelationshipRef, UmlAttribute, UmlClass, UmlMethod, UmlPackage,
};

use config::CompassConfig;

/// Entry point for scoring element pairs.
///
/// The engine only holds its read-only [`CompassConfig`], so one instance
/// can be shared across threads and reused for any number of comparisons.
///
/// Every method takes the element being scored first and the reference it
/// is compared against second. Most rules are symmetric; method similarity
/// and overall class similarity normalize by the reference's member counts.
///
/// # Examples
///
/// ```
/// use compass::{
///     SimilarityEngine,
///     model::{ClassKind, Element, UmlAttribute, UmlClass},
/// };
///
/// let engine = SimilarityEngine::default();
///
/// let submitted = UmlClass::new("Person", ClassKind::Class)
///     .with_attribute(UmlAttribute::new("name", "String"));
/// let reference = UmlClass::new("Person", ClassKind::Class)
///     .with_attribute(UmlAttribute::new("name", "String"))
///     .with_attribute(UmlAttribute::new("age", "int"));
///
/// let overall = engine.overall_similarity(Element::Class(&submitted), Element::Class(&reference));
/// assert!(overall > 0.0 && overall < 1.0);
///
/// // The cheap comparison ignores members entirely.
/// let cheap = engine.similarity(Element::Class(&submitted), Element::Class(&reference));
/// assert!(cheap > 0.99);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: CompassConfig,
}

impl SimilarityEngine {
    /// Create an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError`] if a weight or threshold is not a finite
    /// value in `[0, 1]`.
    pub fn new(config: CompassConfig) -> Result<Self, CompassError> {
        if let Err(err) = config.validate() {
            warn!(err:?; "Rejected similarity configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    /// The configuration this engine scores with.
    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    /// Similarity of two elements of any kind.
    ///
    /// Elements of different kinds score 0. Classes are compared by name and
    /// kind only; use [`SimilarityEngine::overall_similarity`] to include
    /// their members.
    pub fn similarity(&self, element: Element<'_>, reference: Element<'_>) -> f64 {
        let similarity = match (element, reference) {
            (Element::Class(class), Element::Class(reference)) => {
                self.class_similarity(class, reference)
            }
            (Element::Attribute(attribute), Element::Attribute(reference)) => {
                self.attribute_similarity(attribute, reference)
            }
            (Element::Method(method), Element::Method(reference)) => {
                self.method_similarity(method.member(), reference.member())
            }
            (Element::Package(package), Element::Package(reference)) => {
                self.package_similarity(package, reference)
            }
            (Element::Relationship(relationship), Element::Relationship(reference)) => {
                self.relationship_similarity(relationship, reference)
            }
            _ => 0.0,
        };

        trace!(
            element_kind:? = element.kind(),
            reference_kind:? = reference.kind(),
            similarity;
            "Scored element pair"
        );
        similarity
    }

    /// Structural similarity of two elements of any kind.
    ///
    /// For classes this is [`SimilarityEngine::class_overall_similarity`];
    /// every other kind has no members and scores as in
    /// [`SimilarityEngine::similarity`].
    pub fn overall_similarity(&self, element: Element<'_>, reference: Element<'_>) -> f64 {
        match (element, reference) {
            (Element::Class(class), Element::Class(reference)) => {
                self.class_overall_similarity(class, reference)
            }
            _ => self.similarity(element, reference),
        }
    }

    /// Cheap class similarity from name and class kind.
    pub fn class_similarity(&self, class: &UmlClass, reference: &UmlClass) -> f64 {
        similarity::class_similarity(&self.config, class, reference)
    }

    /// Whether two classes count as the same class when gating member
    /// comparisons.
    ///
    /// Assigned similarity classes decide directly; otherwise the cheap class
    /// similarity must exceed the equality threshold.
    pub fn same_class(&self, class: &UmlClass, reference: &UmlClass) -> bool {
        similarity::same_class(&self.config, class, reference)
    }

    /// Overall class similarity including attributes and methods, with the
    /// missing-element penalty.
    pub fn class_overall_similarity(&self, class: &UmlClass, reference: &UmlClass) -> f64 {
        aggregate::class_overall_similarity(&self.config, class, reference)
    }

    /// Attribute similarity; 0 unless both owners are the same class.
    pub fn attribute_similarity(
        &self,
        attribute: MemberRef<'_, UmlAttribute>,
        reference: MemberRef<'_, UmlAttribute>,
    ) -> f64 {
        similarity::attribute_similarity(&self.config, attribute, reference)
    }

    /// Method similarity, normalized by the reference's parameter count.
    pub fn method_similarity(&self, method: &UmlMethod, reference: &UmlMethod) -> f64 {
        similarity::method_similarity(method, reference)
    }

    /// Package similarity by name.
    pub fn package_similarity(&self, package: &UmlPackage, reference: &UmlPackage) -> f64 {
        similarity::package_similarity(package, reference)
    }

    /// Relationship similarity, tolerating swapped ends for undirected kinds.
    pub fn relationship_similarity(
        &self,
        relationship: RelationshipRef<'_>,
        reference: RelationshipRef<'_>,
    ) -> f64 {
        similarity::relationship_similarity(&self.config, relationship, reference)
    }
}
