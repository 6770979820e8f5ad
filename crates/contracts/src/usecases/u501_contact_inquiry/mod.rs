//! u501: отправка контактной формы вместе с корзиной запроса

pub mod form;
pub mod submission;
pub mod summary;

pub use form::{ContactForm, RequiredField, ValidationError, DELIVERY, INQUIRY_TYPES, PICKUP};
pub use submission::{finish_submission, prepare_submission, FormStatus, SubmitError, Submission};
pub use summary::{full_summary, inquiry_listing, NO_ITEMS};
