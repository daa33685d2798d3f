//! Overall class similarity, including attributes and methods.
//!
//! This is the expensive comparison: every member of one class is matched
//! against every member of the same kind in the reference class. Callers
//! comparing whole submission pools are expected to prefilter class pairs
//! with the cheap class similarity first.

use compass_core::model::UmlClass;
use log::trace;

use crate::{
    config::CompassConfig,
    similarity::{attribute_similarity, ensure_similarity_range, method_similarity},
};

/// Overall similarity of `class` to `reference`.
///
/// Each of the reference's members plus its name is worth
/// `1 / (attributes + methods + 1)`. The name counts only on an exact match.
/// Every member of `class` adds its best match against the reference's
/// members of the same kind. A single flat penalty is subtracted when any
/// member of `class` has no usable match or the reference has more members
/// of a kind than `class`.
pub(crate) fn class_overall_similarity(
    config: &CompassConfig,
    class: &UmlClass,
    reference: &UmlClass,
) -> f64 {
    let member_count = reference.attributes().len() + reference.methods().len();
    let weight = 1.0 / (member_count + 1) as f64;
    let no_match_threshold = config.no_match_threshold();

    let mut similarity = 0.0;
    let mut missing_count = 0;

    if class.name() == reference.name() {
        similarity += weight;
    }

    for attribute in class.attribute_refs() {
        let best = best_match(reference.attribute_refs(), |candidate| {
            attribute_similarity(config, attribute, candidate)
        });
        similarity += weight * best;
        if best < no_match_threshold {
            missing_count += 1;
        }
    }

    for method in class.methods() {
        let best = best_match(reference.methods(), |candidate| {
            method_similarity(method, candidate)
        });
        similarity += weight * best;
        if best < no_match_threshold {
            missing_count += 1;
        }
    }

    missing_count += reference
        .attributes()
        .len()
        .saturating_sub(class.attributes().len());
    missing_count += reference.methods().len().saturating_sub(class.methods().len());

    if missing_count > 0 {
        similarity -= config.missing_element_penalty();
    }

    trace!(
        class = class.name(),
        reference = reference.name(),
        missing_count,
        similarity;
        "Scored class members"
    );

    ensure_similarity_range(similarity)
}

/// Highest score among `candidates`, stopping early at a perfect match.
fn best_match<T>(candidates: impl IntoIterator<Item = T>, score: impl Fn(T) -> f64) -> f64 {
    let mut best = 0.0;
    for candidate in candidates {
        best = f64::max(best, score(candidate));
        if best >= 1.0 {
            break;
        }
    }
    best
}


#[cfg(test)]
mod proptest_tests {
    use compass_core::model::{ClassKind, UmlAttribute, UmlMethod};
    use proptest::prelude::*;

    use super::*;

    type Attribute = (String, String);
    type Method = (String, String, Vec<String>);

    /// Reference members and the same members in the compared class's order.
    #[derive(Debug, Clone)]
    struct Members {
        attributes: Vec<Attribute>,
        methods: Vec<Method>,
        shuffled_attributes: Vec<Attribute>,
        shuffled_methods: Vec<Method>,
    }

    // ===================
    // Strategies
    // ===================

    fn type_name_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["int", "String", "double", ""]).prop_map(String::from)
    }

    fn attributes_strategy() -> impl Strategy<Value = Vec<Attribute>> {
        prop::collection::vec(("[a-z]{1,8}", type_name_strategy()), 0..6)
    }

    fn methods_strategy() -> impl Strategy<Value = Vec<Method>> {
        prop::collection::vec(
            (
                "[a-z]{1,8}",
                type_name_strategy(),
                prop::collection::vec(type_name_strategy(), 0..3),
            ),
            0..5,
        )
    }

    fn members_strategy() -> impl Strategy<Value = Members> {
        (attributes_strategy(), methods_strategy()).prop_flat_map(|(attributes, methods)| {
            (
                Just(attributes.clone()),
                Just(methods.clone()),
                Just(attributes).prop_shuffle(),
                Just(methods).prop_shuffle(),
            )
                .prop_map(
                    |(attributes, methods, shuffled_attributes, shuffled_methods)| Members {
                        attributes,
                        methods,
                        shuffled_attributes,
                        shuffled_methods,
                    },
                )
        })
    }

    fn class_with(attributes: &[Attribute], methods: &[Method]) -> UmlClass {
        let class = attributes
            .iter()
            .fold(UmlClass::new("Account", ClassKind::Class), |class, (name, ty)| {
                class.with_attribute(UmlAttribute::new(name.as_str(), ty.as_str()))
            });
        methods.iter().fold(class, |class, (name, return_type, parameters)| {
            class.with_method(UmlMethod::new(
                name.as_str(),
                return_type.as_str(),
                parameters.iter().map(String::as_str),
            ))
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Dropping methods and then attributes from the compared class never
    /// raises its score, whatever order the class lists its members in.
    fn check_removing_members_never_helps(members: Members) -> Result<(), TestCaseError> {
        let config = CompassConfig::default();
        let reference = class_with(&members.attributes, &members.methods);
        let attributes = &members.shuffled_attributes;
        let methods = &members.shuffled_methods;

        let full = class_overall_similarity(&config, &class_with(attributes, methods), &reference);
        prop_assert!((full - 1.0).abs() < 1e-9, "reordered members scored {full}");

        let mut previous = full;
        for kept in (0..methods.len()).rev() {
            let current = class_overall_similarity(
                &config,
                &class_with(attributes, &methods[..kept]),
                &reference,
            );
            prop_assert!(
                current <= previous + 1e-12,
                "score rose from {previous} to {current} with {kept} methods"
            );
            previous = current;
        }
        for kept in (0..attributes.len()).rev() {
            let current = class_overall_similarity(
                &config,
                &class_with(&attributes[..kept], &[]),
                &reference,
            );
            prop_assert!(
                current <= previous + 1e-12,
                "score rose from {previous} to {current} with {kept} attributes"
            );
            previous = current;
        }
        Ok(())
    }

    /// Overall similarity stays in range for arbitrary member lists.
    fn check_in_range(members: Members, reference: Members) -> Result<(), TestCaseError> {
        let similarity = class_overall_similarity(
            &CompassConfig::default(),
            &class_with(&members.attributes, &members.methods),
            &class_with(&reference.attributes, &reference.methods),
        );
        prop_assert!((0.0..=1.0).contains(&similarity));
        Ok(())
    }

    proptest! {
        #[test]
        fn removing_members_never_helps(members in members_strategy()) {
            check_removing_members_never_helps(members)?;
        }

        #[test]
        fn in_range(members in members_strategy(), reference in members_strategy()) {
            check_in_range(members, reference)?;
        }
    }
}
