pub mod config;
pub mod feed;
pub mod format;
pub mod rotation;
pub mod view_state;
