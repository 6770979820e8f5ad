use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Значение `fulfillment`, при котором нужен адрес доставки
pub const DELIVERY: &str = "Delivery";
pub const PICKUP: &str = "Pickup";

/// Варианты выпадающего списка «Inquiry type»
pub const INQUIRY_TYPES: [&str; 4] = ["Rentals", "Photography", "Events", "Other"];

/// Поля контактной формы в том виде, как их ввёл посетитель
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    /// `YYYY-MM-DD` из `<input type="date">`, может быть пустым
    pub event_date: String,
    pub message: String,
    /// Pickup / Delivery
    pub fulfillment: String,
    pub delivery_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    Phone,
    InquiryType,
    Message,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::FirstName,
        RequiredField::LastName,
        RequiredField::Email,
        RequiredField::Phone,
        RequiredField::InquiryType,
        RequiredField::Message,
    ];

    /// Имя поля в отправляемой форме
    pub fn field_name(&self) -> &'static str {
        match self {
            RequiredField::FirstName => "first_name",
            RequiredField::LastName => "last_name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::InquiryType => "inquiry_type",
            RequiredField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::FirstName => "First name",
            RequiredField::LastName => "Last name",
            RequiredField::Email => "Email",
            RequiredField::Phone => "Phone",
            RequiredField::InquiryType => "Inquiry type",
            RequiredField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", field_labels(.0))]
    MissingFields(Vec<RequiredField>),
}

fn field_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn fields(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::FirstName => &self.first_name,
            RequiredField::LastName => &self.last_name,
            RequiredField::Email => &self.email,
            RequiredField::Phone => &self.phone,
            RequiredField::InquiryType => &self.inquiry_type,
            RequiredField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: RequiredField) -> &mut String {
        match field {
            RequiredField::FirstName => &mut self.first_name,
            RequiredField::LastName => &mut self.last_name,
            RequiredField::Email => &mut self.email,
            RequiredField::Phone => &mut self.phone,
            RequiredField::InquiryType => &mut self.inquiry_type,
            RequiredField::Message => &mut self.message,
        }
    }

    /// Проверка обязательных полей (после обрезки пробелов)
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = RequiredField::ALL
            .into_iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    pub fn wants_delivery(&self) -> bool {
        self.fulfillment.trim() == DELIVERY
    }

    /// Поля формы в порядке отправки
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("first_name", self.first_name.trim().to_string()),
            ("last_name", self.last_name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
            ("inquiry_type", self.inquiry_type.trim().to_string()),
            ("event_date", self.event_date.trim().to_string()),
            ("fulfillment", self.fulfillment.trim().to_string()),
        ];
        if self.wants_delivery() {
            fields.push(("delivery_address", self.delivery_address.trim().to_string()));
        }
        fields.push(("message", self.message.trim().to_string()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            inquiry_type: "Rentals".to_string(),
            event_date: String::new(),
            message: "Looking for a backdrop.".to_string(),
            fulfillment: String::new(),
            delivery_address: String::new(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_blank_after_trim_is_missing() {
        let form = ContactForm {
            email: "   ".to_string(),
            message: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields(), &[RequiredField::Email, RequiredField::Message]);
        assert_eq!(err.to_string(), "missing required fields: Email, Message");
    }

    #[test]
    fn test_empty_form_flags_everything() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(err.fields(), &RequiredField::ALL);
    }

    #[test]
    fn test_value_mut_targets_field() {
        let mut form = ContactForm::default();
        for field in RequiredField::ALL {
            *form.value_mut(field) = field.field_name().to_string();
        }
        assert!(form.validate().is_ok());
        assert_eq!(form.value(RequiredField::Phone), "phone");
        assert!(form.event_date.is_empty());
    }

    #[test]
    fn test_delivery_address_only_sent_for_delivery() {
        let form = ContactForm {
            fulfillment: "Pickup".to_string(),
            delivery_address: "1 Main St".to_string(),
            ..filled()
        };
        assert!(!form.fields().iter().any(|(k, _)| *k == "delivery_address"));

        let form = ContactForm {
            fulfillment: DELIVERY.to_string(),
            ..form
        };
        assert!(form
            .fields()
            .iter()
            .any(|(k, v)| *k == "delivery_address" && v == "1 Main St"));
    }
}
