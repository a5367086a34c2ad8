use contracts::shared::metadata::{FieldValues, ValidationErrors, ValidationSchema};

/// Why `begin_submit` refused to hand out the values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Nothing changed since the form was (re)initialized
    Pristine,
    /// Validation failed; errors are stored on the controller
    Invalid,
    /// A previous submit has not been released yet
    InProgress,
}

/// Form state: values, initial values, last validation result, submit flag.
///
/// Validation runs on submit only. Editing a field clears that field's
/// message so the submit gate reopens once every reported field was touched.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController<T> {
    initial: T,
    values: T,
    schema: ValidationSchema,
    errors: ValidationErrors,
    submitting: bool,
}

impl<T: FieldValues + Clone + PartialEq> FormController<T> {
    pub fn new(initial: T, schema: ValidationSchema) -> Self {
        Self {
            values: initial.clone(),
            initial,
            schema,
            errors: ValidationErrors::new(),
            submitting: false,
        }
    }

    pub fn schema(&self) -> ValidationSchema {
        self.schema
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.field_value(field).unwrap_or("")
    }

    /// Returns false for an unknown field
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        if !self.values.set_field_value(field, value) {
            return false;
        }
        let remaining = self
            .errors
            .iter()
            .filter(|(name, _)| *name != field)
            .fold(ValidationErrors::new(), |mut acc, (name, message)| {
                acc.insert(name, message.to_string());
                acc
            });
        self.errors = remaining;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Result of the last validation; true before the first one
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.is_dirty() && !self.submitting
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.schema.validate(&self.values);
        self.errors.is_empty()
    }

    /// Validate and, when dirty and valid, mark submitting and return the values
    pub fn begin_submit(&mut self) -> Result<T, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InProgress);
        }
        if !self.is_dirty() {
            return Err(SubmitBlocked::Pristine);
        }
        if !self.validate() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(self.values.clone())
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Reinitialize: new initial values, errors and submit flag cleared
    pub fn reset(&mut self, initial: T) {
        self.values = initial.clone();
        self.initial = initial;
        self.errors = ValidationErrors::new();
        self.submitting = false;
    }
}
