use std::{collections::HashMap, fmt};

use crate::catalog::parse_datetime_local;

/// Minimum password length enforced at signup.
pub const PASSWORD_MIN_LEN: usize = 8;

/// High-level validation errors used by the account and catalog forms.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    TooShort(usize),
    InvalidFormat(String),
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email address"),
            ValidationError::TooShort(min) => write!(f, "Must be at least {} characters", min),
            ValidationError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Loose structural email check, deliberately no stricter than what the
/// browser's own `type="email"` validation would accept.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn check_email(errors: &mut HashMap<String, ValidationError>, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email".to_string(), ValidationError::Required);
    } else if !is_valid_email(email) {
        errors.insert("email".to_string(), ValidationError::InvalidEmail);
    }
}

/// Input wrapper for the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginValidationInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginValidationInput<'a> {
    /// Validate the login input, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        check_email(&mut errors, self.email);
        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        }
        errors
    }
}

/// Input wrapper for the signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupValidationInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> SignupValidationInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), ValidationError::Required);
        }

        check_email(&mut errors, self.email);

        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        } else if self.password.chars().count() < PASSWORD_MIN_LEN {
            errors.insert("password".to_string(), ValidationError::TooShort(PASSWORD_MIN_LEN));
        }

        errors
    }
}

/// Input wrapper for the course creation form. Price arrives as the raw
/// text field value; parsing is part of validation.
#[derive(Debug, Clone, Default)]
pub struct CourseValidationInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub price: &'a str,
}

impl<'a> CourseValidationInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        if self.title.trim().is_empty() {
            errors.insert("title".to_string(), ValidationError::Required);
        }
        if self.description.trim().is_empty() {
            errors.insert("description".to_string(), ValidationError::Required);
        }
        if self.category.trim().is_empty() {
            errors.insert("category".to_string(), ValidationError::Required);
        }

        if self.price.trim().is_empty() {
            errors.insert("price".to_string(), ValidationError::Required);
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(value) if value < 0.0 => {
                    errors.insert("price".to_string(), ValidationError::Other("Price cannot be negative".to_string()));
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(
                        "price".to_string(),
                        ValidationError::InvalidFormat("enter a number, e.g. 49.99".to_string()),
                    );
                }
            }
        }

        errors
    }
}

/// Input wrapper for the live-session scheduling form.
#[derive(Debug, Clone, Default)]
pub struct SessionScheduleValidationInput<'a> {
    pub course_id: &'a str,
    pub title: &'a str,
    /// Raw `datetime-local` value.
    pub starts_at: &'a str,
    /// Raw minutes field value.
    pub duration_minutes: &'a str,
}

impl<'a> SessionScheduleValidationInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        if self.course_id.trim().is_empty() {
            errors.insert("course_id".to_string(), ValidationError::Required);
        }
        if self.title.trim().is_empty() {
            errors.insert("title".to_string(), ValidationError::Required);
        }

        if self.starts_at.trim().is_empty() {
            errors.insert("starts_at".to_string(), ValidationError::Required);
        } else if parse_datetime_local(self.starts_at).is_none() {
            errors.insert(
                "starts_at".to_string(),
                ValidationError::InvalidFormat("pick a date and time".to_string()),
            );
        }

        if self.duration_minutes.trim().is_empty() {
            errors.insert("duration_minutes".to_string(), ValidationError::Required);
        } else {
            match self.duration_minutes.trim().parse::<u32>() {
                Ok(0) => {
                    errors.insert(
                        "duration_minutes".to_string(),
                        ValidationError::Other("Duration must be at least 1 minute".to_string()),
                    );
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(
                        "duration_minutes".to_string(),
                        ValidationError::InvalidFormat("enter whole minutes".to_string()),
                    );
                }
            }
        }

        errors
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    errors.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
