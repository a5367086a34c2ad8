pub mod api;
pub mod metadata;
