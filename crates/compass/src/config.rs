//! Weights and thresholds for similarity scoring.
//!
//! The constants are fixed, versioned values: they are not learned and not
//! read from the environment. A host application may still override them by
//! injecting its own [`CompassConfig`], for example from a section of its
//! configuration file; every field that is left out keeps its default.
//!
//! # Example
//!
//! ```
//! # use compass::config::CompassConfig;
//! let config = CompassConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.equality_threshold(), compass::config::EQUALITY_THRESHOLD);
//! ```

use serde::Deserialize;

use crate::error::CompassError;

/// Weight of the name when comparing two classes.
pub const CLASS_NAME_WEIGHT: f64 = 0.7;
/// Flat bonus for two classes of the same [`ClassKind`](crate::model::ClassKind).
pub const CLASS_TYPE_WEIGHT: f64 = 0.3;
/// Weight of the name when comparing two attributes.
pub const ATTRIBUTE_NAME_WEIGHT: f64 = 0.7;
/// Weight of the declared type when comparing two attributes.
pub const ATTRIBUTE_TYPE_WEIGHT: f64 = 0.3;
/// Weight of each endpoint class when comparing two relationships.
pub const RELATION_ELEMENT_WEIGHT: f64 = 0.4;
/// Weight of each role when comparing two relationships.
pub const RELATION_ROLE_WEIGHT: f64 = 0.1;
/// Weight of each multiplicity when comparing two relationships.
pub const RELATION_MULTIPLICITY_WEIGHT: f64 = 0.05;
/// Flat bonus for two relationships of the same kind.
pub const RELATION_TYPE_WEIGHT: f64 = 0.2;
/// Similarity above which two classes are treated as the same class.
pub const EQUALITY_THRESHOLD: f64 = 0.95;
/// Best-match similarity below which a member counts as missing.
pub const NO_MATCH_THRESHOLD: f64 = 0.1;
/// Flat deduction applied once when any member is missing.
pub const MISSING_ELEMENT_PENALTY: f64 = 0.05;

/// Read-only scoring configuration.
///
/// Deserializes from any serde format; missing fields fall back to the
/// constants of this module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    class_name_weight: f64,
    class_type_weight: f64,
    attribute_name_weight: f64,
    attribute_type_weight: f64,
    relation_element_weight: f64,
    relation_role_weight: f64,
    relation_multiplicity_weight: f64,
    relation_type_weight: f64,
    equality_threshold: f64,
    no_match_threshold: f64,
    missing_element_penalty: f64,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            class_name_weight: CLASS_NAME_WEIGHT,
            class_type_weight: CLASS_TYPE_WEIGHT,
            attribute_name_weight: ATTRIBUTE_NAME_WEIGHT,
            attribute_type_weight: ATTRIBUTE_TYPE_WEIGHT,
            relation_element_weight: RELATION_ELEMENT_WEIGHT,
            relation_role_weight: RELATION_ROLE_WEIGHT,
            relation_multiplicity_weight: RELATION_MULTIPLICITY_WEIGHT,
            relation_type_weight: RELATION_TYPE_WEIGHT,
            equality_threshold: EQUALITY_THRESHOLD,
            no_match_threshold: NO_MATCH_THRESHOLD,
            missing_element_penalty: MISSING_ELEMENT_PENALTY,
        }
    }
}

impl CompassConfig {
    /// Check that every weight and threshold is a finite value in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError::InvalidWeight`] or
    /// [`CompassError::InvalidThreshold`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CompassError> {
        let weights = [
            ("class_name_weight", self.class_name_weight),
            ("class_type_weight", self.class_type_weight),
            ("attribute_name_weight", self.attribute_name_weight),
            ("attribute_type_weight", self.attribute_type_weight),
            ("relation_element_weight", self.relation_element_weight),
            ("relation_role_weight", self.relation_role_weight),
            ("relation_multiplicity_weight", self.relation_multiplicity_weight),
            ("relation_type_weight", self.relation_type_weight),
            ("missing_element_penalty", self.missing_element_penalty),
        ];
        if let Some((field, value)) = weights.into_iter().find(|(_, value)| !is_unit(*value)) {
            return Err(CompassError::InvalidWeight { field, value });
        }

        let thresholds = [
            ("equality_threshold", self.equality_threshold),
            ("no_match_threshold", self.no_match_threshold),
        ];
        if let Some((field, value)) = thresholds.into_iter().find(|(_, value)| !is_unit(*value)) {
            return Err(CompassError::InvalidThreshold { field, value });
        }

        Ok(())
    }

    pub fn class_name_weight(&self) -> f64 {
        self.class_name_weight
    }

    pub fn class_type_weight(&self) -> f64 {
        self.class_type_weight
    }

    pub fn attribute_name_weight(&self) -> f64 {
        self.attribute_name_weight
    }

    pub fn attribute_type_weight(&self) -> f64 {
        self.attribute_type_weight
    }

    pub fn relation_element_weight(&self) -> f64 {
        self.relation_element_weight
    }

    pub fn relation_role_weight(&self) -> f64 {
        self.relation_role_weight
    }

    pub fn relation_multiplicity_weight(&self) -> f64 {
        self.relation_multiplicity_weight
    }

    pub fn relation_type_weight(&self) -> f64 {
        self.relation_type_weight
    }

    pub fn equality_threshold(&self) -> f64 {
        self.equality_threshold
    }

    pub fn no_match_threshold(&self) -> f64 {
        self.no_match_threshold
    }

    pub fn missing_element_penalty(&self) -> f64 {
        self.missing_element_penalty
    }
}

fn is_unit(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
