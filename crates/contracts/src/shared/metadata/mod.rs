//! Field metadata and declarative validation
//!
//! Forms describe their fields once as a `&'static [FieldMetadata]` and
//! validate through a `ValidationSchema` built from it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_assignment::metadata::SCHEMA;
//!
//! let errors = SCHEMA.validate(&draft);
//! if let Some(message) = errors.get("name") {
//!     println!("name: {}", message);
//! }
//! ```

mod schema;
mod types;
mod validation;

pub use schema::{FieldValues, ValidationErrors, ValidationSchema};
pub use types::FieldMetadata;
pub use validation::ValidationRules;
