pub mod aggregate;

pub use aggregate::{build_rentals, load_rentals, RentalColumns, RentalItem};
