//! Contact form: validation and the EmailJS request.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EmailConfig;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
// international formats: optional +, then at least ten digits, spaces or dashes
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s-]{10,}$").expect("phone pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Phone => "Your Phone",
            Field::Message => "Your Message",
        }
    }

    fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Please enter your name",
            Field::Email => "Please enter a valid email address",
            Field::Phone => "Please enter a valid phone number",
            Field::Message => "Please enter a message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Per-field validation messages. Empty means the form may be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|(f, _)| *f)
    }

    fn push(&mut self, field: Field) {
        self.errors.push((field, field.error_message()));
    }
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(Field::Name);
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(Field::Email);
        }
        if !PHONE_RE.is_match(&self.phone) {
            errors.push(Field::Phone);
        }
        if self.message.trim().is_empty() {
            errors.push(Field::Message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn template_params(&self, recipient: &str) -> TemplateParams {
        TemplateParams {
            to_email: recipient.to_string(),
            from_name: self.name.trim().to_string(),
            from_email: self.email.clone(),
            reply_to: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub phone: String,
    pub message: String,
}

/// Body of the EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("form has invalid fields")]
    Invalid(FieldErrors),
    #[error("email sending is not configured")]
    NotConfigured,
    #[error("email service returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ContactError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Invalid(_) => "Please fix the highlighted fields.",
            _ => "Failed to send message. Please try again later.",
        }
    }
}

/// Banner shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    Hidden,
    Sent,
    Failed(&'static str),
}

/// Banner state tagged with the submission it belongs to.
///
/// A hide timer scheduled for one submission must not clear the banner of a
/// later one, so [`SubmitStatus::expire`] only acts on the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitStatus {
    attempt: u64,
    notice: Notice,
}

impl SubmitStatus {
    pub fn notice(&self) -> Notice {
        self.notice
    }

    /// Starts a new attempt, hiding whatever was shown.
    pub fn begin(&mut self) -> u64 {
        self.attempt += 1;
        self.notice = Notice::Hidden;
        self.attempt
    }

    pub fn finish(&mut self, attempt: u64, notice: Notice) {
        if attempt == self.attempt {
            self.notice = notice;
        }
    }

    /// Hides the success banner of `attempt` if nothing newer replaced it.
    pub fn expire(&mut self, attempt: u64) {
        if attempt == self.attempt && self.notice == Notice::Sent {
            self.notice = Notice::Hidden;
        }
    }
}

/// Validates `form` and builds the request for `config`.
pub fn build_request(form: &ContactForm, config: &EmailConfig) -> Result<EmailRequest, ContactError> {
    form.validate().map_err(ContactError::Invalid)?;
    let user_id = config.public_key.clone().ok_or(ContactError::NotConfigured)?;
    Ok(EmailRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id,
        template_params: form.template_params(&config.recipient),
    })
}

#[cfg(feature = "hydrate")]
pub async fn send(form: &ContactForm, config: &EmailConfig) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let body = build_request(form, config)?;
    let response = Request::post(&config.endpoint)
        .json(&body)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        log::info!("contact message sent");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}
