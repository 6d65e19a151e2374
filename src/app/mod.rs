pub mod app_state;
pub mod navigation;
pub mod profile;
