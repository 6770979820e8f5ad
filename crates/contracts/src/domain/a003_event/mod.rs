pub mod aggregate;

pub use aggregate::{build_events, load_events, EventColumns, EventItem};
