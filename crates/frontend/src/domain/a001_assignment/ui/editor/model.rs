use contracts::domain::a001_assignment::aggregate::{AssignmentDto, AssignmentPayload};
use contracts::domain::a001_assignment::metadata::COLLECTION_NAME;
use serde_json::Value;

use crate::shared::http::{ApiError, HttpMethod, RequestConfig};

/// Where the editor returns when no `return_to` was given
pub const ASSIGNMENTS_LIST_PATH: &str = "/assignments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Update,
}

impl EditorMode {
    /// Past tense used in the success message
    pub fn action_done(&self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
        }
    }
}

pub fn collection_path() -> String {
    format!("/{}", COLLECTION_NAME)
}

/// POST to the collection, or PATCH to the entity named by the draft
pub fn request_target(mode: EditorMode, draft: &AssignmentDto) -> (HttpMethod, String) {
    match mode {
        EditorMode::Create => (HttpMethod::Post, collection_path()),
        EditorMode::Update => (
            HttpMethod::Patch,
            format!(
                "{}/{}",
                collection_path(),
                urlencoding::encode(draft.name.trim())
            ),
        ),
    }
}

/// Draft -> wire payload; the draft itself is not modified
pub fn transform_request(draft: &AssignmentDto) -> Result<Value, ApiError> {
    serde_json::to_value(AssignmentPayload::from(draft))
        .map_err(|e| ApiError::Serialize(e.to_string()))
}

pub fn build_request(mode: EditorMode, draft: AssignmentDto) -> RequestConfig<AssignmentDto> {
    let (method, url) = request_target(mode, &draft);
    RequestConfig::new(method, url)
        .with_data(draft)
        .with_transform(transform_request)
}

pub fn success_message(mode: EditorMode, draft: &AssignmentDto) -> String {
    format!(
        "Assignment {} {} successfully!",
        draft.name.trim(),
        mode.action_done()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: &str) -> AssignmentDto {
        AssignmentDto {
            name: name.to_string(),
            created_at: "2024-03-15".to_string(),
            updated_at: "2024-03-16".to_string(),
        }
    }

    #[test]
    fn test_create_targets_collection() {
        assert_eq!(
            request_target(EditorMode::Create, &draft("HW1")),
            (HttpMethod::Post, "/assignments".to_string())
        );
    }

    #[test]
    fn test_update_targets_entity() {
        assert_eq!(
            request_target(EditorMode::Update, &draft("HW1")),
            (HttpMethod::Patch, "/assignments/HW1".to_string())
        );
        assert_eq!(
            request_target(EditorMode::Update, &draft("Essay 2/3")).1,
            "/assignments/Essay%202%2F3"
        );
    }

    #[test]
    fn test_build_request_body() {
        let config = build_request(EditorMode::Create, draft(" HW1 "));
        assert_eq!(
            config.body(),
            Ok(Some(json!({
                "name": "HW1",
                "created_at": "2024-03-15",
                "updated_at": "2024-03-16",
            })))
        );
        assert_eq!(config.data.map(|d| d.name).as_deref(), Some(" HW1 "));
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message(EditorMode::Create, &draft("HW1")),
            "Assignment HW1 created successfully!"
        );
        assert!(success_message(EditorMode::Update, &draft("HW1")).contains("updated"));
    }
}
