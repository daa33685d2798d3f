//! Compass Core Types
//!
//! This crate provides the element model consumed by the Compass similarity
//! engine. It includes:
//!
//! - **Identifiers**: Diagram-scoped interning of tool-assigned identifiers
//!   ([`identifier::Identifiers`])
//! - **Model**: Classes, members, packages, relationships and the owning
//!   diagram ([`model`] module)
//! - **Errors**: Validation errors raised while building a diagram ([`ModelError`])

pub mod identifier;
pub mod model;

mod error;

pub use error::ModelError;
