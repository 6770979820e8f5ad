pub mod a001_rental;
pub mod a002_photo_service;
pub mod a003_event;
pub mod common;
