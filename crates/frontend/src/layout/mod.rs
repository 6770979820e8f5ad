pub mod global_context;
pub mod toast;
