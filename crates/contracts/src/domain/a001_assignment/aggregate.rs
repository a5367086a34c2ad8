use serde::{Deserialize, Serialize};

use crate::shared::metadata::FieldValues;

// ============================================================================
// Form DTO
// ============================================================================

/// Draft of an assignment as edited in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDto {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FieldValues for AssignmentDto {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "created_at" => Some(&self.created_at),
            "updated_at" => Some(&self.updated_at),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "created_at" => self.created_at = value,
            "updated_at" => self.updated_at = value,
            _ => return false,
        }
        true
    }
}

// ============================================================================
// Wire payload
// ============================================================================

/// Body of `POST /assignments` and `PATCH /assignments/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AssignmentDto> for AssignmentPayload {
    fn from(dto: &AssignmentDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            created_at: dto.created_at.trim().to_string(),
            updated_at: dto.updated_at.trim().to_string(),
        }
    }
}
