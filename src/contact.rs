use std::future::Future;
use std::sync::LazyLock;

use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://myportfolio-server-three.vercel.app/api/send-email";
pub const MIN_MESSAGE_LEN: usize = 10;

const REJECTED_FALLBACK: &str = "Something went wrong";
const FAILURE_FALLBACK: &str =
    "There was a problem sending your message. Please try again.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Mail endpoint, overridable at build time with `CONTACT_ENDPOINT`.
pub fn endpoint() -> &'static str {
    option_env!("CONTACT_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Body of the POST, and the values held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.email = Some("Please enter a valid email address");
        }

        if self.message.trim().is_empty() {
            errors.message = Some("Message is required");
        } else if self.message.chars().count() < MIN_MESSAGE_LEN {
            errors.message = Some("Message must be at least 10 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("contact form has invalid fields")]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    message: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// JSON reply from the mail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Transport(String),
    #[error("{}", .message.as_deref().unwrap_or(REJECTED_FALLBACK))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
}

/// Turns the raw status and body of a reply into a result.
///
/// A reply counts as sent when the status is 2xx, the body parses, and the
/// body does not explicitly report `"success": false`.
pub fn interpret(status: u16, body: &str) -> Result<SendResponse, ContactError> {
    let status = StatusCode::from_u16(status).map_err(|e| ContactError::Decode(e.to_string()))?;
    let parsed = serde_json::from_str::<SendResponse>(body);

    if !status.is_success() {
        return Err(ContactError::Rejected {
            status,
            message: parsed.ok().and_then(|r| r.message),
        });
    }

    let res = parsed.map_err(|e| ContactError::Decode(e.to_string()))?;
    if res.success == Some(false) {
        return Err(ContactError::Rejected {
            status,
            message: res.message,
        });
    }
    Ok(res)
}

/// Something that can deliver a contact message.
pub trait EmailTransport {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<SendResponse, ContactError>>;
}

/// Posts messages as JSON with `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct HttpTransport {
    endpoint: &'static str,
}

#[cfg(feature = "hydrate")]
impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            endpoint: endpoint(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl EmailTransport for HttpTransport {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<SendResponse, ContactError>> {
        let request = gloo_net::http::Request::post(self.endpoint).json(message);
        async move {
            let request = request.map_err(|e| ContactError::Encode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            interpret(status, &body)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn sent() -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Message sent successfully".to_string(),
            description: "Thank you for your message. I'll get back to you soon.".to_string(),
        }
    }

    pub fn failed(err: &ContactError) -> Self {
        let description = match err.to_string() {
            s if s.trim().is_empty() => FAILURE_FALLBACK.to_string(),
            s => s,
        };
        Self {
            kind: ToastKind::Error,
            title: "Error sending message".to_string(),
            description,
        }
    }
}

/// Contact form values plus the busy flag and last validation result.
///
/// A submission is split in two so the network call can run outside any
/// borrow of the form: [`ContactForm::begin_submit`] validates and marks the
/// form busy, [`ContactForm::finish_submit`] consumes the transport result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactMessage,
    errors: FieldErrors,
    busy: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactMessage {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Updates one field and drops its stale validation message.
    pub fn set(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validates and marks the form busy. Returns the message to send, or
    /// `None` when invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.busy {
            return None;
        }
        match self.values.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.busy = true;
                Some(self.values.clone())
            }
            Err(errors) => {
                log::debug!("contact form rejected: {errors}");
                self.errors = errors;
                None
            }
        }
    }

    /// Clears the busy flag and produces the notification for the outcome.
    pub fn finish_submit(&mut self, result: Result<SendResponse, ContactError>) -> Toast {
        self.busy = false;
        match result {
            Ok(_) => {
                self.values = ContactMessage::default();
                Toast::sent()
            }
            Err(err) => {
                log::warn!("contact message not sent: {err:?}");
                Toast::failed(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeTransport {
        calls: Cell<usize>,
        reply: Result<SendResponse, ContactError>,
    }

    impl FakeTransport {
        fn replying(reply: Result<SendResponse, ContactError>) -> Self {
            Self {
                calls: Cell::new(0),
                reply,
            }
        }
    }

    impl EmailTransport for FakeTransport {
        fn send(
            &self,
            _message: &ContactMessage,
        ) -> impl Future<Output = Result<SendResponse, ContactError>> {
            self.calls.set(self.calls.get() + 1);
            let reply = self.reply.clone();
            async move { reply }
        }
    }

    // Mirrors what the contact section does on submit.
    async fn submit(form: &mut ContactForm, transport: &FakeTransport, toasts: &mut Vec<Toast>) {
        let Some(message) = form.begin_submit() else {
            return;
        };
        assert!(form.is_busy());
        let result = transport.send(&message).await;
        toasts.push(form.finish_submit(result));
    }

    fn filled(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Message, message.to_string());
        form
    }

    fn ok_reply() -> Result<SendResponse, ContactError> {
        Ok(SendResponse {
            success: Some(true),
            message: None,
        })
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn email_format() {
        for bad in ["plain", "a@b", "a b@c.d", "@c.d", "a@@c.d"] {
            let msg = ContactMessage {
                name: "n".into(),
                email: bad.into(),
                message: "long enough message".into(),
            };
            let errors = msg.validate().unwrap_err();
            assert_eq!(
                errors.get(Field::Email),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
        let msg = ContactMessage {
            name: "n".into(),
            email: "someone@mail.example.org".into(),
            message: "long enough message".into(),
        };
        assert!(msg.validate().is_ok());
    }

    #[tokio::test]
    async fn nine_chars_never_reaches_network() {
        let transport = FakeTransport::replying(ok_reply());
        let mut form = filled("123456789");
        let mut toasts = Vec::new();

        submit(&mut form, &transport, &mut toasts).await;

        assert_eq!(transport.calls.get(), 0);
        assert!(toasts.is_empty());
        assert!(!form.is_busy());
        assert_eq!(
            form.error(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[tokio::test]
    async fn ten_chars_sends_once() {
        let transport = FakeTransport::replying(ok_reply());
        let mut form = filled("1234567890");
        let mut toasts = Vec::new();

        submit(&mut form, &transport, &mut toasts).await;

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(toasts.len(), 1);
    }

    #[tokio::test]
    async fn success_clears_fields() {
        let transport = FakeTransport::replying(ok_reply());
        let mut form = filled("Hello there, let's talk.");
        let mut toasts = Vec::new();

        submit(&mut form, &transport, &mut toasts).await;

        assert_eq!(toasts, vec![Toast::sent()]);
        assert!(!form.is_busy());
        assert_eq!(form.values(), &ContactMessage::default());
    }

    #[tokio::test]
    async fn rejection_surfaces_server_message() {
        let transport = FakeTransport::replying(interpret(
            500,
            r#"{"success":false,"message":"Mailbox full"}"#,
        ));
        let mut form = filled("Hello there, let's talk.");
        let mut toasts = Vec::new();

        submit(&mut form, &transport, &mut toasts).await;

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].title, "Error sending message");
        assert_eq!(toasts[0].description, "Mailbox full");
        assert!(!form.is_busy());
        // Values survive a failed attempt.
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[tokio::test]
    async fn transport_failure_is_one_error() {
        let transport =
            FakeTransport::replying(Err(ContactError::Transport("Failed to fetch".into())));
        let mut form = filled("Hello there, let's talk.");
        let mut toasts = Vec::new();

        submit(&mut form, &transport, &mut toasts).await;

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "Failed to fetch");
        assert!(!form.is_busy());
    }

    #[test]
    fn busy_form_ignores_second_submit() {
        let mut form = filled("Hello there, let's talk.");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.finish_submit(ok_reply());
        assert!(!form.is_busy());
    }

    #[test]
    fn invalid_submit_leaves_form_idle() {
        let mut form = filled("too short");
        assert!(form.begin_submit().is_none());
        assert!(!form.is_busy());

        form.set(Field::Message, "long enough now".into());
        assert!(form.begin_submit().is_some());
        assert!(form.is_busy());
        form.finish_submit(ok_reply());
        assert!(!form.is_busy());
    }

    #[test]
    fn editing_clears_field_error() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        assert!(form.error(Field::Name).is_some());
        form.set(Field::Name, "Ada".into());
        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn interpret_replies() {
        assert_eq!(interpret(200, "{}"), Ok(SendResponse::default()));

        let err = interpret(400, "not json").unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong");
        assert_eq!(
            err,
            ContactError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: None
            }
        );

        let err = interpret(200, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong");

        assert!(matches!(
            interpret(200, "<html>"),
            Err(ContactError::Decode(_))
        ));
    }

    #[test]
    fn blank_error_text_falls_back() {
        let toast = Toast::failed(&ContactError::Transport(String::new()));
        assert_eq!(
            toast.description,
            "There was a problem sending your message. Please try again."
        );
    }

    #[test]
    fn message_serializes_as_flat_json() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }
}
