//! Per-kind similarity rules.
//!
//! Every function returns a score in `[0, 1]`. Functions take the element
//! being scored first and the reference it is compared against second;
//! where a rule is asymmetric the reference decides the normalization.

use compass_core::model::{
    MemberRef, RelationshipRef, UmlAttribute, UmlClass, UmlElement, UmlMethod, UmlPackage,
};

use crate::{
    config::CompassConfig,
    name::{edit_distance_similarity, exact_or_empty_similarity},
};

/// Clamp a weighted sum into `[0, 1]`.
pub(crate) fn ensure_similarity_range(similarity: f64) -> f64 {
    similarity.clamp(0.0, 1.0)
}

/// Cheap class similarity: name and class kind only, members ignored.
pub(crate) fn class_similarity(
    config: &CompassConfig,
    class: &UmlClass,
    reference: &UmlClass,
) -> f64 {
    let mut similarity =
        edit_distance_similarity(class.name(), reference.name()) * config.class_name_weight();
    if class.class_kind() == reference.class_kind() {
        similarity += config.class_type_weight();
    }
    ensure_similarity_range(similarity)
}

/// Decides whether two classes are the same class for parent gating.
///
/// Assigned similarity classes decide directly. Otherwise the cheap class
/// similarity has to exceed the equality threshold.
pub(crate) fn same_class(config: &CompassConfig, class: &UmlClass, reference: &UmlClass) -> bool {
    match class
        .similarity_class()
        .same_cluster(reference.similarity_class())
    {
        Some(same) => same,
        None => class_similarity(config, class, reference) > config.equality_threshold(),
    }
}

/// Attribute similarity, gated on the owning classes being the same.
pub(crate) fn attribute_similarity(
    config: &CompassConfig,
    attribute: MemberRef<'_, UmlAttribute>,
    reference: MemberRef<'_, UmlAttribute>,
) -> f64 {
    if !same_class(config, attribute.owner(), reference.owner()) {
        return 0.0;
    }

    let attribute = attribute.member();
    let reference = reference.member();
    let similarity = edit_distance_similarity(attribute.name(), reference.name())
        * config.attribute_name_weight()
        + exact_or_empty_similarity(attribute.attribute_type(), reference.attribute_type())
            * config.attribute_type_weight();
    ensure_similarity_range(similarity)
}

/// Method similarity from name, return type, and parameter types.
///
/// Each of name, return type, and every reference parameter is worth
/// `1 / (2 + reference parameter count)`. A reference parameter scores if it
/// appears anywhere in `method`'s parameters, so extra parameters on `method`
/// are not penalized.
pub(crate) fn method_similarity(method: &UmlMethod, reference: &UmlMethod) -> f64 {
    let weight = 1.0 / (2 + reference.parameters().len()) as f64;

    let mut similarity = exact_or_empty_similarity(method.name(), reference.name()) * weight;
    similarity += exact_or_empty_similarity(method.return_type(), reference.return_type()) * weight;
    for parameter in reference.parameters() {
        if method.parameters().contains(parameter) {
            similarity += weight;
        }
    }
    ensure_similarity_range(similarity)
}

pub(crate) fn package_similarity(package: &UmlPackage, reference: &UmlPackage) -> f64 {
    ensure_similarity_range(edit_distance_similarity(package.name(), reference.name()))
}

/// One orientation of a relationship: its endpoint classes and facets.
#[derive(Clone, Copy)]
struct Orientation<'d> {
    source: &'d UmlClass,
    target: &'d UmlClass,
    source_role: &'d str,
    target_role: &'d str,
    source_multiplicity: &'d str,
    target_multiplicity: &'d str,
}

impl<'d> Orientation<'d> {
    fn of(relationship: RelationshipRef<'d>) -> Self {
        let inner = relationship.relationship();
        Self {
            source: relationship.source(),
            target: relationship.target(),
            source_role: inner.source_role().unwrap_or_default(),
            target_role: inner.target_role().unwrap_or_default(),
            source_multiplicity: inner.source_multiplicity().unwrap_or_default(),
            target_multiplicity: inner.target_multiplicity().unwrap_or_default(),
        }
    }

    fn swapped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            source_role: self.target_role,
            target_role: self.source_role,
            source_multiplicity: self.target_multiplicity,
            target_multiplicity: self.source_multiplicity,
        }
    }
}

/// Normalized endpoint-and-facet score of one orientation, in `[0, 1]`.
///
/// A facet only enters numerator and denominator when at least one side
/// sets it.
fn orientation_similarity(
    config: &CompassConfig,
    relationship: &Orientation<'_>,
    reference: &Orientation<'_>,
) -> f64 {
    let element_weight = config.relation_element_weight();
    let mut similarity = class_similarity(config, relationship.source, reference.source)
        * element_weight
        + class_similarity(config, relationship.target, reference.target) * element_weight;
    let mut weight = 2.0 * element_weight;

    let role_weight = config.relation_role_weight();
    let multiplicity_weight = config.relation_multiplicity_weight();
    let facets = [
        (relationship.source_role, reference.source_role, role_weight),
        (relationship.target_role, reference.target_role, role_weight),
        (
            relationship.source_multiplicity,
            reference.source_multiplicity,
            multiplicity_weight,
        ),
        (
            relationship.target_multiplicity,
            reference.target_multiplicity,
            multiplicity_weight,
        ),
    ];
    for (value, reference_value, facet_weight) in facets {
        if value.is_empty() && reference_value.is_empty() {
            continue;
        }
        similarity += exact_or_empty_similarity(value, reference_value) * facet_weight;
        weight += facet_weight;
    }

    if weight > 0.0 { similarity / weight } else { 0.0 }
}

/// Relationship similarity.
///
/// The normalized endpoint/facet score plus a type bonus when both
/// relationships have the same kind, clamped. For undirected kinds the
/// reference is also scored with its ends exchanged and the better
/// orientation is kept.
pub(crate) fn relationship_similarity(
    config: &CompassConfig,
    relationship: RelationshipRef<'_>,
    reference: RelationshipRef<'_>,
) -> f64 {
    let kind = relationship.relationship().relationship_kind();
    let reference_kind = reference.relationship().relationship_kind();

    let straight = Orientation::of(relationship);
    let reference_orientation = Orientation::of(reference);
    let mut share = orientation_similarity(config, &straight, &reference_orientation);
    if kind.is_undirected() {
        let swapped = orientation_similarity(config, &straight, &reference_orientation.swapped());
        share = share.max(swapped);
    }

    let mut similarity = share;
    if kind == reference_kind {
        similarity += config.relation_type_weight();
    }
    ensure_similarity_range(similarity)
}
