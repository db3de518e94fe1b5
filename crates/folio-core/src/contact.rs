//! Contact form record and validation.
//!
//! The record is the flat key-value shape the submission store persists.
//! Validation is per-field and never raises; the form surfaces the
//! returned errors inline and simply refuses to submit while any remain.

use std::collections::BTreeMap;

/// One entry in the country-code dropdown, with the expected national
/// number length for its dial code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub dial_code: &'static str,
    pub min_digits: u8,
    pub max_digits: u8,
}

/// Countries offered by the contact form dropdown.
pub const COUNTRIES: &[Country] = &[
    Country { name: "Egypt", dial_code: "+20", min_digits: 10, max_digits: 10 },
    Country { name: "United Kingdom", dial_code: "+44", min_digits: 9, max_digits: 10 },
    Country { name: "United States", dial_code: "+1", min_digits: 10, max_digits: 10 },
    Country { name: "Germany", dial_code: "+49", min_digits: 7, max_digits: 11 },
    Country { name: "France", dial_code: "+33", min_digits: 9, max_digits: 9 },
    Country { name: "Netherlands", dial_code: "+31", min_digits: 9, max_digits: 9 },
    Country { name: "Sweden", dial_code: "+46", min_digits: 7, max_digits: 9 },
    Country { name: "Spain", dial_code: "+34", min_digits: 9, max_digits: 9 },
    Country { name: "Italy", dial_code: "+39", min_digits: 9, max_digits: 10 },
    Country { name: "United Arab Emirates", dial_code: "+971", min_digits: 8, max_digits: 9 },
    Country { name: "Saudi Arabia", dial_code: "+966", min_digits: 8, max_digits: 9 },
    Country { name: "Canada", dial_code: "+1", min_digits: 10, max_digits: 10 },
];

/// Fallback digit span when the dial code is not in [`COUNTRIES`].
const DEFAULT_MIN_DIGITS: u8 = 6;
const DEFAULT_MAX_DIGITS: u8 = 14;

/// First country matching `dial_code`.
pub fn find_country(dial_code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.dial_code == dial_code)
}

/// Form fields that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// One inline validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The contact form as filled in by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub dial_code: String,
    pub phone: String,
    pub message: String,
}

impl ContactRecord {
    /// Check every field, collecting all failures rather than stopping at
    /// the first so the form can mark each offending input at once.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(Field::Name, "Please enter your name."));
        }

        if !email_looks_valid(self.email.trim()) {
            errors.push(FieldError::new(
                Field::Email,
                "Please enter a valid email address.",
            ));
        }

        if let Some(error) = self.phone_error() {
            errors.push(error);
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::new(Field::Message, "Please enter a message."));
        }

        errors
    }

    fn phone_error(&self) -> Option<FieldError> {
        let trimmed = self.phone.trim();
        if trimmed.is_empty() {
            return Some(FieldError::new(
                Field::Phone,
                "Please enter your phone number.",
            ));
        }

        let mut digits = String::new();
        for ch in trimmed.chars() {
            match ch {
                '0'..='9' => digits.push(ch),
                ' ' | '-' | '(' | ')' | '.' => {}
                _ => {
                    return Some(FieldError::new(
                        Field::Phone,
                        "Phone numbers may only contain digits and separators.",
                    ))
                }
            }
        }

        let (min, max, country) = match find_country(&self.dial_code) {
            Some(country) => (country.min_digits, country.max_digits, Some(country.name)),
            None => (DEFAULT_MIN_DIGITS, DEFAULT_MAX_DIGITS, None),
        };

        let count = digits.len() as u8;
        if count >= min && count <= max {
            return None;
        }

        let expected = if min == max {
            format!("{min} digits")
        } else {
            format!("{min}-{max} digits")
        };
        let message = match country {
            Some(name) => format!("Phone numbers for {name} have {expected}."),
            None => format!("Phone numbers have {expected}."),
        };
        Some(FieldError::new(Field::Phone, message))
    }

    /// Flat key-value record, the shape handed to the submission store.
    pub fn fields(&self) -> BTreeMap<String, String> {
        let country = find_country(&self.dial_code)
            .map(|c| c.name.to_string())
            .unwrap_or_default();
        BTreeMap::from([
            ("name".to_string(), self.name.trim().to_string()),
            ("email".to_string(), self.email.trim().to_string()),
            ("country".to_string(), country),
            (
                "phone".to_string(),
                format!("{} {}", self.dial_code, self.phone.trim()),
            ),
            ("message".to_string(), self.message.trim().to_string()),
        ])
    }
}

fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> ContactRecord {
        ContactRecord {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            dial_code: "+44".to_string(),
            phone: "7700 900123".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(valid_record().validate().is_empty());
    }

    #[test]
    fn blank_fields_each_get_an_error() {
        let record = ContactRecord::default();
        let errors = record.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&Field::Name));
        assert!(fields.contains(&Field::Email));
        assert!(fields.contains(&Field::Phone));
        assert!(fields.contains(&Field::Message));
    }

    #[test]
    fn email_must_have_local_domain_and_tld() {
        for bad in ["plainaddress", "@no-local.com", "user@", "user@nodot"] {
            let mut record = valid_record();
            record.email = bad.to_string();
            assert!(
                record.validate().iter().any(|e| e.field == Field::Email),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn phone_separators_are_ignored() {
        let mut record = valid_record();
        record.phone = "(7700) 900-123".to_string();
        assert!(record.validate().is_empty());
    }

    #[test]
    fn phone_length_is_country_aware() {
        let mut record = valid_record();
        record.dial_code = "+33".to_string();
        record.phone = "612345678".to_string();
        assert!(record.validate().is_empty());

        record.phone = "61234".to_string();
        let errors = record.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Phone);
        assert!(errors[0].message.contains("France"));
    }

    #[test]
    fn phone_rejects_stray_characters() {
        let mut record = valid_record();
        record.phone = "7700call900123".to_string();
        assert!(record.validate().iter().any(|e| e.field == Field::Phone));
    }

    #[test]
    fn unknown_dial_code_uses_default_span() {
        let mut record = valid_record();
        record.dial_code = "+999".to_string();
        record.phone = "1234567".to_string();
        assert!(record.validate().is_empty());
    }

    #[test]
    fn fields_flatten_for_the_store() {
        let fields = valid_record().fields();
        assert_eq!(fields.get("name").unwrap(), "Ada Lovelace");
        assert_eq!(fields.get("country").unwrap(), "United Kingdom");
        assert_eq!(fields.get("phone").unwrap(), "+44 7700 900123");
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn find_country_returns_first_match_for_shared_codes() {
        // +1 is both the United States and Canada; dropdown order wins.
        assert_eq!(find_country("+1").unwrap().name, "United States");
    }
}
