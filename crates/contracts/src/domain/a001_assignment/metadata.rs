use crate::shared::metadata::{FieldMetadata, ValidationRules, ValidationSchema};

/// REST collection of assignments
pub const COLLECTION_NAME: &str = "assignments";

pub const FIELD_NAME: &str = "name";
pub const FIELD_CREATED_AT: &str = "created_at";
pub const FIELD_UPDATED_AT: &str = "updated_at";

const REQUIRED: ValidationRules = ValidationRules::required().with_message("Required");

/// Field metadata array
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: FIELD_NAME,
        label: "Name",
        control_id: "assignment-name",
        placeholder: None,
        validation: REQUIRED,
    },
    FieldMetadata {
        name: FIELD_CREATED_AT,
        label: "Created At",
        control_id: "assignment-created-at",
        placeholder: None,
        validation: REQUIRED,
    },
    FieldMetadata {
        name: FIELD_UPDATED_AT,
        label: "Updated At",
        control_id: "assignment-updated-at",
        placeholder: None,
        validation: REQUIRED,
    },
];

pub const SCHEMA: ValidationSchema = ValidationSchema::new(FIELDS);
