use super::form::{ContactForm, RequiredField, ValidationError};
use super::summary::{full_summary, inquiry_listing};
use crate::system::inquiry::{CartStorage, InquiryCart, InquiryEntry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("network error: {0}")]
    Network(String),
    #[error("form backend responded with status {0}")]
    Rejected(u16),
}

impl SubmitError {
    /// Сообщение для баннера формы
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "Please fill in all required fields.",
            SubmitError::Network(_) | SubmitError::Rejected(_) => {
                "Sorry, we couldn't send your inquiry. Please try again in a moment."
            }
        }
    }
}

/// Validated form, ready to be posted.
///
/// Only `prepare_submission` builds one, so an invalid form never reaches
/// the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub listing: String,
    pub summary: String,
    pub fields: Vec<(&'static str, String)>,
}

impl Submission {
    /// Тело запроса `application/x-www-form-urlencoded`
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn prepare_submission(
    form: &ContactForm,
    entries: &[InquiryEntry],
    form_name: &str,
) -> Result<Submission, ValidationError> {
    form.validate()?;

    let listing = inquiry_listing(entries);
    let summary = full_summary(form, &listing);

    let mut fields = vec![("form-name", form_name.to_string())];
    fields.extend(form.fields());
    fields.push(("inquiry_items", listing.clone()));
    fields.push(("summary", summary.clone()));

    Ok(Submission {
        listing,
        summary,
        fields,
    })
}

/// Состояние контактной формы для отображения баннеров
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(Vec<RequiredField>),
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn is_invalid(&self, field: RequiredField) -> bool {
        matches!(self, FormStatus::Invalid(fields) if fields.contains(&field))
    }
}

/// Apply the result of a post: on success the form is reset and the cart
/// emptied; on failure both are left as they were so the visitor can retry.
pub fn finish_submission<S: CartStorage>(
    result: Result<(), SubmitError>,
    form: &mut ContactForm,
    cart: &InquiryCart<S>,
) -> FormStatus {
    match result {
        Ok(()) => {
            *form = ContactForm::default();
            cart.clear();
            log::info!("Inquiry sent");
            FormStatus::Sent
        }
        Err(SubmitError::Validation(e)) => FormStatus::Invalid(e.fields().to_vec()),
        Err(e) => {
            log::error!("Inquiry submission failed: {}", e);
            FormStatus::Failed(e.user_message().to_string())
        }
    }
}
