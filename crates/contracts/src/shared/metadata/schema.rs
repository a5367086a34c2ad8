//! Declarative validation schema built from static field metadata

use super::types::FieldMetadata;

/// Read/write access to a values object by field name
pub trait FieldValues {
    fn field_value(&self, field: &str) -> Option<&str>;

    /// Returns false when the object has no such field
    fn set_field_value(&mut self, field: &str, value: String) -> bool;
}

/// Field -> message map, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: String) {
        match self.errors.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.errors.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (*name, message.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: &'static [FieldMetadata],
}

impl ValidationSchema {
    pub const fn new(fields: &'static [FieldMetadata]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldMetadata] {
        self.fields
    }

    /// Run every field's rules. An empty result means the values are valid.
    ///
    /// A field missing from `values` is validated as an empty string.
    pub fn validate<T: FieldValues + ?Sized>(&self, values: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in self.fields {
            let value = values.field_value(field.name).unwrap_or("");
            if let Err(message) = field.validation.validate_string(value, field.label) {
                errors.insert(field.name, message);
            }
        }
        errors
    }
}
