pub mod api_utils;
pub mod form;
pub mod http;
pub mod icons;
pub mod modal_frame;
pub mod navigation;
pub mod notifications;
