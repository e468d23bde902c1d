//! Site settings that are not content: third-party ids and asset paths.
//!
//! Values can be overridden at build time through the environment, e.g.
//! `EMAILJS_PUBLIC_KEY=... cargo leptos build`.

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_d009rcg";
const DEFAULT_TEMPLATE_ID: &str = "template_rejpmll";
const DEFAULT_RECIPIENT: &str = "mo.rezk06@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key; sending is disabled without one.
    pub public_key: Option<String>,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvConfig {
    pub path: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub email: EmailConfig,
    pub cv: CvConfig,
}

fn non_empty(value: Option<&'static str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: non_empty(option_env!("EMAILJS_SERVICE_ID"))
                .unwrap_or_else(|| DEFAULT_SERVICE_ID.to_string()),
            template_id: non_empty(option_env!("EMAILJS_TEMPLATE_ID"))
                .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()),
            public_key: non_empty(option_env!("EMAILJS_PUBLIC_KEY")),
            recipient: non_empty(option_env!("CONTACT_RECIPIENT"))
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
        }
    }
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            path: "/uploads/documents/cv.pdf".to_string(),
            file_name: "cv.pdf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.email.endpoint, EMAILJS_ENDPOINT);
        assert!(!config.email.service_id.is_empty());
        assert!(!config.email.template_id.is_empty());
        assert!(config.email.recipient.contains('@'));
        assert_eq!(config.cv.path, "/uploads/documents/cv.pdf");
        assert_eq!(config.cv.file_name, "cv.pdf");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("key")), Some("key".to_string()));
    }
}
