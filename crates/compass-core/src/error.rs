//! Errors raised while assembling a diagram.

use thiserror::Error;

use crate::model::{ClassId, ElementLocation, PackageId};

/// Errors reported while building or annotating a diagram.
///
/// Scoring never fails; these only guard the construction of the element
/// graph so that every reference the engine follows is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("class {0} is not part of this diagram")]
    UnknownClass(ClassId),

    #[error("class {class} already belongs to package {package}")]
    ClassAlreadyInPackage { class: ClassId, package: PackageId },

    #[error("no element at {0:?} in this diagram")]
    UnknownElement(ElementLocation),
}
