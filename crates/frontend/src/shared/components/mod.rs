pub mod event_carousel;
pub mod pagination_controls;
pub mod rotating_card;
