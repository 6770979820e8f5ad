pub mod aggregate;

pub use aggregate::{build_photo_services, load_photo_services, PhotoService, PhotoServiceColumns};
