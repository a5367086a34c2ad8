//! Assignment editor UI module
//!
//! MVVM split:
//! - model.rs: request building and success messages
//! - state.rs: submission lifecycle
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use model::{EditorMode, ASSIGNMENTS_LIST_PATH};
pub use state::{EditorMachine, EditorState};
pub use view::AssignmentEditor;
pub use view_model::AssignmentEditorViewModel;
