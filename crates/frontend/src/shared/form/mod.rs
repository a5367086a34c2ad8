mod controller;

pub use controller::{FormController, SubmitBlocked};
