//! Contact form model: field checks, submission flow and status messages.

use chrono::NaiveDateTime;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::email::{MailSender, Outgoing, SendError};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

pub const INVALID_ALERT: &str = "Por favor, preencha todos os campos obrigatórios corretamente.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn outgoing(&self, tempo: String) -> Outgoing {
        Outgoing {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            tempo,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Valid,
    Invalid,
}

impl Validity {
    fn check(ok: bool) -> Self {
        if ok {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn border_color(self) -> &'static str {
        match self {
            Validity::Valid => "#ddd",
            Validity::Invalid => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub name: Validity,
    pub email: Validity,
    pub message: Validity,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        [self.name, self.email, self.message]
            .iter()
            .all(|v| *v == Validity::Valid)
    }
}

pub fn validate(form: &ContactForm) -> FieldReport {
    FieldReport {
        name: Validity::check(!form.name.trim().is_empty()),
        // Blank check on the trimmed value, pattern on the raw one: padded addresses fail.
        email: Validity::check(!form.email.trim().is_empty() && EMAIL_PATTERN.is_match(&form.email)),
        message: Validity::check(!form.message.trim().is_empty()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub tone: Tone,
}

impl StatusMessage {
    pub const SENDING: Self = Self { text: "Enviando mensagem... ⏳", tone: Tone::Progress };
    pub const SENT: Self = Self { text: "Mensagem enviada com sucesso! ✅", tone: Tone::Success };
    pub const FAILED: Self = Self { text: "Erro ao enviar ❌, tente novamente.", tone: Tone::Failure };

    pub fn color(&self) -> &'static str {
        match self.tone {
            Tone::Progress => "blue",
            Tone::Success => "green",
            Tone::Failure => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Submit control disabled.
    Sending,
    /// Submit control enabled again, whatever the outcome.
    Settled { delivered: bool },
}

impl SubmitPhase {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitPhase::Sending)
    }

    pub fn status(&self) -> StatusMessage {
        match self {
            SubmitPhase::Sending => StatusMessage::SENDING,
            SubmitPhase::Settled { delivered: true } => StatusMessage::SENT,
            SubmitPhase::Settled { delivered: false } => StatusMessage::FAILED,
        }
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

pub fn timestamp() -> String {
    format_timestamp(chrono::Local::now().naive_local())
}

/// Sends an already validated form. `on_phase` sees `Sending` before the call and
/// exactly one `Settled` after it.
pub async fn submit<S, F>(
    sender: &S,
    form: &ContactForm,
    tempo: String,
    mut on_phase: F,
) -> Result<(), SendError>
where
    S: MailSender,
    F: FnMut(SubmitPhase),
{
    on_phase(SubmitPhase::Sending);

    let result = sender.send(&form.outgoing(tempo)).await;
    match &result {
        Ok(()) => info!("Contact message delivered"),
        Err(e) => error!("Contact message failed: {}", e),
    }

    on_phase(SubmitPhase::Settled { delivered: result.is_ok() });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingSender {
        fail: bool,
        sent: RefCell<Vec<Outgoing>>,
    }

    impl RecordingSender {
        fn new(fail: bool) -> Self {
            Self { fail, sent: RefCell::new(Vec::new()) }
        }
    }

    impl MailSender for RecordingSender {
        async fn send(&self, outgoing: &Outgoing) -> Result<(), SendError> {
            self.sent.borrow_mut().push(outgoing.clone());
            if self.fail {
                Err(SendError::Network("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm { name: name.into(), email: email.into(), message: message.into() }
    }

    #[test]
    fn empty_email_blocks_and_other_fields_report_independently() {
        let report = validate(&form("Rita", "", "Olá"));
        assert!(!report.is_valid());
        assert_eq!(report.email, Validity::Invalid);
        assert_eq!(report.name, Validity::Valid);
        assert_eq!(report.message, Validity::Valid);

        let report = validate(&form("  ", "", "Olá"));
        assert_eq!(report.name, Validity::Invalid);
        assert_eq!(report.message, Validity::Valid);
    }

    #[test]
    fn email_must_look_like_an_address() {
        for bad in [
            "rita",
            "rita@",
            "rita@example",
            "ri ta@example.com",
            "@example.com",
            " rita@example.com ",
            "  rita@mail.example.pt ",
        ] {
            assert_eq!(validate(&form("Rita", bad, "Olá")).email, Validity::Invalid, "{}", bad);
        }
        for good in ["rita@example.com", "rita@mail.example.pt"] {
            assert_eq!(validate(&form("Rita", good, "Olá")).email, Validity::Valid, "{}", good);
        }
    }

    #[test]
    fn outgoing_keeps_fields_as_typed() {
        let outgoing = form("Rita ", "rita@example.com", "  Olá\n").outgoing("t".into());
        assert_eq!(outgoing.name, "Rita ");
        assert_eq!(outgoing.message, "  Olá\n");
        assert_eq!(outgoing.tempo, "t");
    }

    #[test]
    fn blank_message_is_invalid() {
        let report = validate(&form("Rita", "rita@example.com", "\n\t "));
        assert_eq!(report.message, Validity::Invalid);
        assert_eq!(report.message.border_color(), "red");
        assert_eq!(report.name.border_color(), "#ddd");
    }

    #[test]
    fn successful_send_disables_then_reenables() {
        let sender = RecordingSender::new(false);
        let mut phases = Vec::new();
        let result = block_on(submit(
            &sender,
            &form(" Rita ", "rita@example.com", "Olá"),
            "19/10/2026 10:00:00".into(),
            |phase| phases.push(phase),
        ));

        assert!(result.is_ok());
        assert_eq!(phases, [SubmitPhase::Sending, SubmitPhase::Settled { delivered: true }]);
        assert!(phases[0].is_sending());
        assert!(!phases[1].is_sending());

        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, " Rita ");
        assert_eq!(sent[0].tempo, "19/10/2026 10:00:00");
    }

    #[test]
    fn failed_send_still_settles() {
        let sender = RecordingSender::new(true);
        let mut phases = Vec::new();
        let result = block_on(submit(
            &sender,
            &form("Rita", "rita@example.com", "Olá"),
            String::new(),
            |phase| phases.push(phase),
        ));

        assert!(matches!(result, Err(SendError::Network(_))));
        assert_eq!(phases.last(), Some(&SubmitPhase::Settled { delivered: false }));
        assert_eq!(phases.last().map(|p| p.status()), Some(StatusMessage::FAILED));
        assert_eq!(StatusMessage::FAILED.color(), "red");
    }

    #[test]
    fn timestamp_uses_day_first_format() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        assert_eq!(format_timestamp(at), "07/03/2026 09:05:00");
    }
}
