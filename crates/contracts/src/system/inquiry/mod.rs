//! Корзина запроса (inquiry cart): выбранные позиции каталога, которые
//! посетитель хочет обсудить. Хранится целиком одной записью в хранилище
//! браузера.

pub mod cart;
pub mod entry;
pub mod storage;

pub use cart::InquiryCart;
pub use entry::{derive_sku, Inquirable, InquiryEntry};
pub use storage::{CartStorage, MemoryStorage};
