pub mod editor;
pub mod page;
