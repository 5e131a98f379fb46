use serde::{Deserialize, Serialize};

use crate::error::BuzonError;

/// Raw form payload as posted to `/enviar-formulario`. Missing fields
/// deserialize as empty strings so they fail validation like blank ones.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A validated submission: all fields trimmed and non-empty, email
/// syntactically plausible.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(self) -> Result<Submission, BuzonError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(BuzonError::Validation("All fields are required"));
        }
        if !is_valid_email(email) {
            return Err(BuzonError::Validation(
                "Please enter a valid email address",
            ));
        }

        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Minimal syntactic check: non-empty local part, a single `@`, and a domain
/// containing a dot with non-empty segments. Deliverability is not verified.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// JSON body returned by the form endpoint: `{success, message}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    pub message: String,
}

impl FormResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
