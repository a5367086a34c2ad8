//! Field metadata types
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Key used by `FieldValues` and in error maps
    pub name: &'static str,
    pub label: &'static str,
    /// DOM id of the bound input
    pub control_id: &'static str,
    pub placeholder: Option<&'static str>,
    pub validation: ValidationRules,
}
