//! Integration tests for the SimilarityEngine API
//!
//! These tests build small diagrams the way the parsing collaborator would
//! and score them through the public API only.

use compass::{
    CompassError, ModelError, SimilarityEngine,
    config::CompassConfig,
    model::{
        ClassKind, Element, ElementKind, ElementLocation, RelationshipKind, SimilarityClass,
        UmlAttribute, UmlClass, UmlDiagram, UmlMethod, UmlPackage, UmlRelationship,
    },
};
use float_cmp::assert_approx_eq;

/// A library diagram with every element kind.
fn library_diagram() -> UmlDiagram {
    let mut builder = UmlDiagram::builder();
    let book = builder.add_class(
        UmlClass::new("Book", ClassKind::Class)
            .with_external_id("it-book")
            .with_attribute(UmlAttribute::new("title", "String").with_external_id("it-title"))
            .with_attribute(UmlAttribute::new("isbn", "String"))
            .with_method(UmlMethod::new("lend", "bool", ["Member"]).with_external_id("it-lend")),
    );
    let member = builder.add_class(
        UmlClass::new("Member", ClassKind::Class)
            .with_attribute(UmlAttribute::new("name", "String")),
    );
    let item = builder.add_class(UmlClass::new("Item", ClassKind::AbstractClass));
    builder
        .add_relationship(
            UmlRelationship::new(member, book, RelationshipKind::Bidirectional)
                .with_source_role("borrower")
                .with_target_role("loans")
                .with_target_multiplicity("0..*")
                .with_external_id("it-borrows"),
        )
        .expect("valid endpoints");
    builder
        .add_relationship(UmlRelationship::new(book, item, RelationshipKind::Inheritance))
        .expect("valid endpoints");
    builder
        .add_package(
            UmlPackage::new("library", [book, member, item]).with_external_id("it-library"),
        )
        .expect("valid members");
    builder.build()
}

#[test]
fn test_engine_exists() {
    let engine = SimilarityEngine::default();
    assert_eq!(engine.config(), &CompassConfig::default());
}

#[test]
fn test_engine_rejects_invalid_config() {
    let config: CompassConfig = toml::from_str("missing_element_penalty = 3.0").expect("parses");
    let result = SimilarityEngine::new(config);
    assert!(matches!(
        result,
        Err(CompassError::InvalidWeight {
            field: "missing_element_penalty",
            ..
        })
    ));
}

#[test]
fn test_every_element_is_reflexive() {
    let engine = SimilarityEngine::default();
    let diagram = library_diagram();

    for element in diagram.elements() {
        assert_approx_eq!(
            f64,
            engine.similarity(element, element),
            1.0,
            epsilon = 1e-9
        );
        assert_approx_eq!(
            f64,
            engine.overall_similarity(element, element),
            1.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_different_kinds_score_zero() {
    let engine = SimilarityEngine::default();
    let diagram = library_diagram();

    for element in diagram.elements() {
        for reference in diagram.elements() {
            if element.kind() != reference.kind() {
                assert_eq!(
                    engine.similarity(element, reference),
                    0.0,
                    "{element} vs {reference}"
                );
                assert_eq!(engine.overall_similarity(element, reference), 0.0);
            }
        }
    }
}

#[test]
fn test_scores_across_diagrams_stay_in_range() {
    let engine = SimilarityEngine::default();
    let first = library_diagram();
    let second = library_diagram();

    for element in first.elements() {
        for reference in second.elements() {
            let similarity = engine.similarity(element, reference);
            assert!((0.0..=1.0).contains(&similarity), "{element} vs {reference}");
            let overall = engine.overall_similarity(element, reference);
            assert!((0.0..=1.0).contains(&overall), "{element} vs {reference}");
        }
    }
}

#[test]
fn test_lookup_then_score() {
    let engine = SimilarityEngine::default();
    let submission = library_diagram();
    let reference = library_diagram();

    for external_id in ["it-book", "it-title", "it-lend", "it-borrows", "it-library"] {
        let element = submission
            .element_by_external_id(external_id)
            .expect("element in submission");
        let counterpart = reference
            .element_by_external_id(external_id)
            .expect("element in reference");
        assert_approx_eq!(
            f64,
            engine.similarity(element, counterpart),
            1.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_person_examples() {
    let engine = SimilarityEngine::default();
    let person = UmlClass::new("Person", ClassKind::Class)
        .with_attribute(UmlAttribute::new("name", "String"));
    let person_with_age = person.clone().with_attribute(UmlAttribute::new("age", "int"));

    let exact = engine.class_overall_similarity(&person, &person.clone());
    assert_approx_eq!(f64, exact, 1.0, epsilon = 1e-9);

    let partial = engine.class_overall_similarity(&person, &person_with_age);
    assert!(partial > 0.0 && partial < 1.0);
    assert!(partial < exact);
}

#[test]
fn test_attribute_gating_with_identical_members() {
    let engine = SimilarityEngine::default();
    let customer = UmlClass::new("Customer", ClassKind::Class)
        .with_attribute(UmlAttribute::new("id", "long"));
    let invoice = UmlClass::new("Invoice", ClassKind::Class)
        .with_attribute(UmlAttribute::new("id", "long"));

    assert!(engine.class_similarity(&customer, &invoice) < engine.config().equality_threshold());
    let attribute = customer.attribute(0).expect("attribute");
    let reference = invoice.attribute(0).expect("attribute");
    assert_eq!(engine.attribute_similarity(attribute, reference), 0.0);
    assert_eq!(
        engine.similarity(Element::Attribute(attribute), Element::Attribute(reference)),
        0.0
    );
}

#[test]
fn test_similarity_class_fast_path_through_diagram() {
    let engine = SimilarityEngine::default();
    let mut submission = library_diagram();
    let reference = UmlClass::new("Publication", ClassKind::Class)
        .with_similarity_class(SimilarityClass::Assigned(21))
        .with_attribute(UmlAttribute::new("title", "String"));
    let reference_title = reference.attribute(0).expect("title attribute");

    let book = submission.locate("it-book").expect("book is indexed");
    let ElementLocation::Class(book_id) = book else {
        panic!("it-book should be a class, got {book:?}");
    };

    // "Book" and "Publication" are not similar by name.
    let title = submission.class(book_id).and_then(|class| class.attribute(0));
    assert_eq!(
        engine.attribute_similarity(title.expect("title attribute"), reference_title),
        0.0
    );

    // Once clustering has grouped both classes, the attributes compare.
    submission
        .set_similarity_class(book, SimilarityClass::Assigned(21))
        .expect("book class");
    let title = submission.class(book_id).and_then(|class| class.attribute(0));
    assert_approx_eq!(
        f64,
        engine.attribute_similarity(title.expect("title attribute"), reference_title),
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_foreign_location_is_rejected() {
    let mut submission = library_diagram();
    let relationship_count = submission.relationship_count();

    // A location from a larger diagram points past this one.
    let mut builder = UmlDiagram::builder();
    let a = builder.add_class(UmlClass::new("A", ClassKind::Class));
    for _ in 0..=relationship_count {
        builder
            .add_relationship(UmlRelationship::new(a, a, RelationshipKind::Dependency))
            .expect("valid endpoints");
    }
    let larger = builder.build();
    let foreign = larger.locations().last().expect("larger diagram has elements");
    assert!(matches!(foreign, ElementLocation::Relationship(_)));

    assert_eq!(
        submission.set_similarity_class(foreign, SimilarityClass::Assigned(5)),
        Err(ModelError::UnknownElement(foreign))
    );
    assert!(submission.element(foreign).is_none());
    assert_eq!(submission.relationships().count(), relationship_count);
    assert!(
        submission
            .elements()
            .all(|element| element.similarity_class() == SimilarityClass::Unassigned)
    );
}

#[test]
fn test_relationship_orientation() {
    let engine = SimilarityEngine::default();
    let mut builder = UmlDiagram::builder();
    let student = builder.add_class(UmlClass::new("Student", ClassKind::Class));
    let course = builder.add_class(UmlClass::new("Course", ClassKind::Class));
    for kind in [RelationshipKind::Bidirectional, RelationshipKind::Unidirectional] {
        builder
            .add_relationship(
                UmlRelationship::new(student, course, kind)
                    .with_source_role("attendee")
                    .with_target_role("lecture"),
            )
            .expect("valid endpoints");
        builder
            .add_relationship(
                UmlRelationship::new(course, student, kind)
                    .with_source_role("lecture")
                    .with_target_role("attendee"),
            )
            .expect("valid endpoints");
    }
    let diagram = builder.build();
    let relationships: Vec<_> = diagram.relationships().collect();

    let bidirectional = engine.relationship_similarity(relationships[0], relationships[1]);
    let bidirectional_self = engine.relationship_similarity(relationships[0], relationships[0]);
    assert_approx_eq!(f64, bidirectional, bidirectional_self, epsilon = 1e-9);

    let unidirectional = engine.relationship_similarity(relationships[2], relationships[3]);
    let unidirectional_self = engine.relationship_similarity(relationships[2], relationships[2]);
    assert!(unidirectional < unidirectional_self);

    let element = Element::Relationship(relationships[0]);
    assert_eq!(element.kind(), ElementKind::Relationship);
    assert_eq!(element.name(), "Student ClassBidirectional Course");
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = SimilarityEngine::default();
    let diagram = library_diagram();

    let scores: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = diagram
            .classes()
            .iter()
            .map(|class| {
                let engine = &engine;
                let diagram = &diagram;
                scope.spawn(move || {
                    diagram
                        .classes()
                        .iter()
                        .map(|reference| engine.class_overall_similarity(class, reference))
                        .sum::<f64>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("scoring never panics"))
            .collect()
    });

    assert_eq!(scores.len(), diagram.classes().len());
    assert!(scores.iter().all(|score| score.is_finite()));
}
