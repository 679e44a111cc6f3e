//! Local form state for the registration dialog and the contact card.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::api::{ContactUpdate, RegisterRequest, SafeUser};

/// Fields of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Email,
    Name,
    Password,
}

impl RegisterField {
    pub const ALL: [Self; 3] = [Self::Email, Self::Name, Self::Password];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Password => "Password",
        }
    }

    /// HTML input type.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "text",
            Self::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

pub type FormErrors = BTreeMap<RegisterField, FormError>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterForm {
    #[must_use]
    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Email => &self.email,
            RegisterField::Name => &self.name,
            RegisterField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::Email => self.email = value,
            RegisterField::Name => self.name = value,
            RegisterField::Password => self.password = value,
        }
    }

    /// Check that every field is filled in and build the request body.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let errors: FormErrors = RegisterField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .map(|field| (field, FormError::Required(field.label())))
            .collect();

        if errors.is_empty() {
            Ok(RegisterRequest {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Editable contact fields of the item-owner card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Phone,
    PickupAddress,
    FinalPickupDate,
}

/// Locally edited copy of a user's contact details.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactEditBuffer {
    pub phone: String,
    pub pickup_address: String,
    /// `YYYY-MM-DD`, the format date inputs read and write.
    pub final_pickup_date: String,
}

impl ContactEditBuffer {
    #[must_use]
    pub fn from_user(user: &SafeUser) -> Self {
        Self {
            phone: user.phone.clone().unwrap_or_default(),
            pickup_address: user.pickup_address.clone().unwrap_or_default(),
            final_pickup_date: user
                .final_pickup_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Phone => self.phone = value,
            ContactField::PickupAddress => self.pickup_address = value,
            ContactField::FinalPickupDate => self.final_pickup_date = value,
        }
    }

    #[must_use]
    pub fn to_update(&self) -> ContactUpdate {
        ContactUpdate {
            phone: self.phone.clone(),
            pickup_address: self.pickup_address.clone(),
            final_pickup_date: self.final_pickup_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn empty_form_reports_every_field() {
        let errors = RegisterForm::default().validate().expect_err("should fail");
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(&RegisterField::Email).map(ToString::to_string),
            Some("Email is required".to_string())
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = RegisterForm::default();
        form.set(RegisterField::Email, "ada@example.org".to_string());
        form.set(RegisterField::Name, "   ".to_string());
        form.set(RegisterField::Password, "hunter2".to_string());

        let errors = form.validate().expect_err("name is blank");
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![RegisterField::Name]);
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let form = RegisterForm {
            email: " ada@example.org ".to_string(),
            name: "Ada".to_string(),
            password: " secret ".to_string(),
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.email, "ada@example.org");
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn contact_buffer_copies_user_fields() {
        let user = SafeUser {
            id: "u1".to_string(),
            phone: Some("555-0100".to_string()),
            final_pickup_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            ..SafeUser::default()
        };
        let buffer = ContactEditBuffer::from_user(&user);
        assert_eq!(buffer.phone, "555-0100");
        assert_eq!(buffer.pickup_address, "");
        assert_eq!(buffer.final_pickup_date, "2024-05-01");
    }

    #[test]
    fn contact_buffer_submits_wholesale() {
        let mut buffer = ContactEditBuffer::default();
        buffer.set(ContactField::PickupAddress, "Dorm 4".to_string());
        let update = buffer.to_update();
        assert_eq!(update.pickup_address, "Dorm 4");
        assert_eq!(update.phone, "");
    }
}
