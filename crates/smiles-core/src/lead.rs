//! Lead Draft
//!
//! State behind the contact form: four free-text fields that live for one
//! page view, get edited field by field, and reset after a successful submit.
//! Submissions go through a [`LeadSink`]; the only sink shipped here logs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Result, SiteError};

/// Acknowledgement shown after a successful submit
pub const ACKNOWLEDGEMENT: &str = "Thanks! We will reach out shortly.";

/// WHATWG "valid e-mail address" grammar, as used by `<input type=email>`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%\&'*+/=?^_`{|}\~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// One input of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Website,
    Whatsapp,
}

impl LeadField {
    /// All fields in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Website, Self::Whatsapp];

    pub const fn required(self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Website => "Clinic Website",
            Self::Whatsapp => "WhatsApp Number",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Dr. Jane Doe",
            Self::Email => "you@clinic.com",
            Self::Website => "https://yourclinic.com",
            Self::Whatsapp => "+1 234 567 8900",
        }
    }

    /// Form control name and id suffix
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Website => "website",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Value of the `type` attribute on the input
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    /// Name and email sit side by side; the rest span the full row
    pub const fn full_width(self) -> bool {
        matches!(self, Self::Website | Self::Whatsapp)
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated submission handed to a sink
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub website: String,
    pub whatsapp: String,
}

/// In-progress contents of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub website: String,
    pub whatsapp: String,
}

impl LeadDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Website => &self.website,
            LeadField::Whatsapp => &self.whatsapp,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Website => &mut self.website,
            LeadField::Whatsapp => &mut self.whatsapp,
        };
        *slot = value.into();
    }

    /// Apply the checks a browser runs before firing `submit`
    pub fn validate(&self) -> Result<Lead> {
        for field in LeadField::ALL {
            if field.required() && sanitize(field, self.get(field)).is_empty() {
                return Err(SiteError::Missing(field));
            }
        }

        let email = sanitize(LeadField::Email, &self.email);
        if !email.is_empty() && !is_valid_email(&email) {
            return Err(SiteError::InvalidEmail(email));
        }

        Ok(Lead {
            name: sanitize(LeadField::Name, &self.name),
            email,
            website: self.website.clone(),
            whatsapp: self.whatsapp.clone(),
        })
    }

    /// Validate, hand the lead to `sink`, then clear the draft.
    ///
    /// The draft is only reset once the sink has accepted the lead; any error
    /// leaves every field as the user typed it.
    pub fn submit(&mut self, sink: &dyn LeadSink) -> Result<Lead> {
        let lead = self.validate()?;
        sink.record(&lead)?;
        *self = Self::default();
        Ok(lead)
    }
}

/// Browser value sanitization: single-line inputs drop every line break,
/// email inputs also drop surrounding ASCII whitespace.
fn sanitize(field: LeadField, value: &str) -> String {
    let value = value.replace(['\r', '\n'], "");
    match field {
        LeadField::Email => value.trim_matches(|c: char| c.is_ascii_whitespace()).to_string(),
        _ => value,
    }
}

/// Check an address against the `<input type=email>` grammar
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Destination for submitted leads
pub trait LeadSink {
    fn record(&self, lead: &Lead) -> Result<()>;
}

/// Sink that writes the lead to the log and nowhere else
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LeadSink for LogSink {
    fn record(&self, lead: &Lead) -> Result<()> {
        let payload = serde_json::to_string(lead)?;
        tracing::info!(lead = %payload, "Contact form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        leads: RefCell<Vec<Lead>>,
    }

    impl LeadSink for RecordingSink {
        fn record(&self, lead: &Lead) -> Result<()> {
            self.leads.borrow_mut().push(lead.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl LeadSink for FailingSink {
        fn record(&self, _lead: &Lead) -> Result<()> {
            Err(SiteError::Sink("unavailable".into()))
        }
    }

    fn filled() -> LeadDraft {
        let mut draft = LeadDraft::new();
        draft.set(LeadField::Name, "Dr. Jane Doe");
        draft.set(LeadField::Email, "jane@clinic.com");
        draft.set(LeadField::Website, "https://clinic.com");
        draft.set(LeadField::Whatsapp, "+1 234 567 8900");
        draft
    }

    #[test]
    fn test_set_touches_one_field() {
        let mut draft = LeadDraft::new();
        assert_eq!(draft, LeadDraft::default());

        draft.set(LeadField::Website, "https://clinic.com");
        assert_eq!(draft.get(LeadField::Website), "https://clinic.com");
        assert_eq!(draft.get(LeadField::Name), "");
        assert_ne!(draft, LeadDraft::default());
    }

    #[test]
    fn test_submit_clears_all_fields() {
        let sink = RecordingSink::default();
        let mut draft = filled();

        let lead = draft.submit(&sink).unwrap();

        assert_eq!(draft, LeadDraft::default());
        assert_eq!(lead.name, "Dr. Jane Doe");
        assert_eq!(sink.leads.borrow().len(), 1);
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let sink = RecordingSink::default();
        let mut draft = LeadDraft::new();
        draft.set(LeadField::Name, "Sam");
        draft.set(LeadField::Email, "sam@example.org");

        assert!(draft.submit(&sink).is_ok());
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn test_missing_required_field_keeps_draft() {
        let sink = RecordingSink::default();

        for field in [LeadField::Name, LeadField::Email] {
            let mut draft = filled();
            draft.set(field, "");
            let before = draft.clone();

            let err = draft.submit(&sink).unwrap_err();
            assert!(matches!(err, SiteError::Missing(f) if f == field));
            assert_eq!(draft, before);
        }
        assert!(sink.leads.borrow().is_empty());
    }

    #[test]
    fn test_whitespace_only_email_is_missing() {
        let mut draft = filled();
        draft.set(LeadField::Email, "   ");
        assert!(matches!(draft.validate(), Err(SiteError::Missing(LeadField::Email))));
    }

    #[test]
    fn test_invalid_email_keeps_draft() {
        let mut draft = filled();
        draft.set(LeadField::Email, "jane@");
        let before = draft.clone();

        let err = draft.submit(&RecordingSink::default()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidEmail(_)));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_email_is_trimmed() {
        let mut draft = filled();
        draft.set(LeadField::Email, "  jane@clinic.com \n");
        assert_eq!(draft.validate().unwrap().email, "jane@clinic.com");
    }

    #[test]
    fn test_email_keeps_unicode_whitespace() {
        let mut draft = filled();
        draft.set(LeadField::Email, "\u{a0}jane@clinic.com");
        assert!(matches!(draft.validate(), Err(SiteError::InvalidEmail(_))));
    }

    #[test]
    fn test_line_breaks_are_stripped() {
        let mut draft = filled();
        draft.set(LeadField::Name, "Dr. Jane\r\nDoe");
        draft.set(LeadField::Email, "jane@cli\nnic.com");

        let lead = draft.validate().unwrap();
        assert_eq!(lead.name, "Dr. JaneDoe");
        assert_eq!(lead.email, "jane@clinic.com");
    }

    #[test]
    fn test_line_breaks_only_name_is_missing() {
        let mut draft = filled();
        draft.set(LeadField::Name, "\n\r\n");
        assert!(matches!(draft.validate(), Err(SiteError::Missing(LeadField::Name))));
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.clinic.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("trailing@dash-.com"));
        assert!(!is_valid_email("space in@clinic.com"));
    }

    #[test]
    fn test_sink_failure_keeps_draft() {
        let mut draft = filled();
        let before = draft.clone();

        let err = draft.submit(&FailingSink).unwrap_err();
        assert!(matches!(err, SiteError::Sink(_)));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_log_sink_accepts_lead() {
        let mut draft = filled();
        assert!(draft.submit(&LogSink).is_ok());
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn test_field_metadata() {
        let required: Vec<_> = LeadField::ALL.iter().filter(|f| f.required()).collect();
        assert_eq!(required, [&LeadField::Name, &LeadField::Email]);
        assert_eq!(LeadField::Email.input_type(), "email");
        assert_eq!(LeadField::Whatsapp.input_type(), "text");
    }
}
