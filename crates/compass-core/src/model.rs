//! The UML class-diagram element model.
//!
//! Elements are created once by the code that parses a submitted diagram and
//! are read-only afterwards; only their similarity classes may be recorded
//! later by the clustering step, through
//! [`UmlDiagram::set_similarity_class`].
//!
//! # Ownership
//!
//! ```text
//! UmlDiagram
//!   ├── UmlClass ──owns──> UmlAttribute, UmlMethod
//!   ├── UmlRelationship ──ClassId──> source / target class
//!   └── UmlPackage ──ClassId──> member classes (class keeps a PackageId back)
//! ```
//!
//! Back-references never own: members reach their class through
//! [`MemberRef`], relationships through [`RelationshipRef`].
//!
//! # Organization
//!
//! - [`element`] - [`Element`], [`ElementKind`], [`SimilarityClass`], [`UmlElement`]
//! - [`class`] - [`UmlClass`], [`UmlAttribute`], [`UmlMethod`], [`MemberRef`]
//! - [`package`] - [`UmlPackage`]
//! - [`relationship`] - [`UmlRelationship`], [`RelationshipRef`]
//! - [`diagram`] - [`UmlDiagram`], [`DiagramBuilder`], element lookup
//! - [`index`] - [`ElementLocation`], [`ElementIndex`]

pub mod class;
pub mod diagram;
pub mod element;
pub mod index;
pub mod package;
pub mod relationship;

pub use class::*;
pub use diagram::*;
pub use element::{Element, ElementKind, SimilarityClass, UmlElement};
pub use index::*;
pub use package::*;
pub use relationship::*;
