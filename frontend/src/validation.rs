use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Nom trop court")]
    NameTooShort,
    #[error("Email invalide")]
    InvalidEmail,
    #[error("Message trop court")]
    MessageTooShort,
    #[error("Email invalide pour l'inscription.")]
    InvalidSubscriptionEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl FieldError {
    /// Contact form field the error belongs to.
    pub fn field(self) -> Option<ContactField> {
        match self {
            FieldError::NameTooShort => Some(ContactField::Name),
            FieldError::InvalidEmail => Some(ContactField::Email),
            FieldError::MessageTooShort => Some(ContactField::Message),
            FieldError::InvalidSubscriptionEmail => None,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validates every field, returning the trimmed form or all failures in field order.
pub fn validate_contact(form: &ContactForm) -> Result<ContactForm, Vec<FieldError>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let mut errors = Vec::new();
    if name.chars().count() < MIN_NAME_LEN {
        errors.push(FieldError::NameTooShort);
    }
    if !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(FieldError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub fn validate_newsletter(email: &str) -> Result<String, FieldError> {
    let email = email.trim();
    if is_valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(FieldError::InvalidSubscriptionEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  a@b.com "));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_needs_two_characters() {
        let short = validate_contact(&form("A", "a@b.com", "Bonjour !"));
        assert_eq!(short, Err(vec![FieldError::NameTooShort]));

        let ok = validate_contact(&form("Al", "a@b.com", "Bonjour !"));
        assert!(ok.is_ok());
    }

    #[test]
    fn whitespace_does_not_count() {
        let result = validate_contact(&form("  A  ", " a@b.com ", "  court "));
        assert_eq!(
            result,
            Err(vec![FieldError::NameTooShort, FieldError::MessageTooShort])
        );
    }

    #[test]
    fn accented_names_count_characters() {
        assert!(validate_contact(&form("Zoé", "z@e.fr", "Un message")).is_ok());
        assert_eq!(
            validate_contact(&form("É", "z@e.fr", "Un message")),
            Err(vec![FieldError::NameTooShort])
        );
    }

    #[test]
    fn every_failure_is_reported() {
        let errors = validate_contact(&form("", "foo@bar", "")).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameTooShort,
                FieldError::InvalidEmail,
                FieldError::MessageTooShort
            ]
        );
        assert_eq!(errors[1].field(), Some(ContactField::Email));
        assert_eq!(errors[1].to_string(), "Email invalide");
    }

    #[test]
    fn valid_form_is_trimmed() {
        let clean = validate_contact(&form(" Marie ", "marie@exemple.fr ", " Bonjour l'équipe ")).unwrap();
        assert_eq!(clean, form("Marie", "marie@exemple.fr", "Bonjour l'équipe"));
    }

    #[test]
    fn newsletter_email() {
        assert_eq!(validate_newsletter(" a@b.com"), Ok("a@b.com".to_string()));
        let err = validate_newsletter("foo@bar").unwrap_err();
        assert_eq!(err.to_string(), "Email invalide pour l'inscription.");
        assert_eq!(err.field(), None);
    }
}
