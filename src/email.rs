use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Template parameters of one contact message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outgoing {
    pub name: String,
    pub email: String,
    pub message: String,
    pub tempo: String,
}

#[allow(async_fn_in_trait)]
pub trait MailSender {
    async fn send(&self, outgoing: &Outgoing) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Outgoing,
}

/// EmailJS REST client. One POST per message, no retry.
#[derive(Debug, Clone)]
pub struct EmailJs {
    api: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJs {
    pub fn from_config() -> Self {
        Self {
            api: config::get_emailjs_api().to_string(),
            service_id: config::EMAILJS_SERVICE_ID.to_string(),
            template_id: config::EMAILJS_TEMPLATE_ID.to_string(),
            public_key: config::EMAILJS_PUBLIC_KEY.to_string(),
        }
    }

    fn body<'a>(&'a self, outgoing: &'a Outgoing) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: outgoing,
        }
    }
}

impl MailSender for EmailJs {
    async fn send(&self, outgoing: &Outgoing) -> Result<(), SendError> {
        let request = Request::post(&format!("{}/email/send", self.api))
            .json(&self.body(outgoing))
            .map_err(|e| SendError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let client = EmailJs::from_config();
        let outgoing = Outgoing {
            name: "Rita".into(),
            email: "rita@example.com".into(),
            message: "Orçamento para 40 pessoas".into(),
            tempo: "19/10/2026 14:05:00".into(),
        };
        let body = serde_json::to_value(client.body(&outgoing)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_yyh7pwq",
                "template_id": "template_UNICO",
                "user_id": "9gcyy6iP8sB6lYb2f",
                "template_params": {
                    "name": "Rita",
                    "email": "rita@example.com",
                    "message": "Orçamento para 40 pessoas",
                    "tempo": "19/10/2026 14:05:00"
                }
            })
        );
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = SendError::Rejected { status: 412, body: "template not found".into() };
        assert_eq!(err.to_string(), "email service answered 412: template not found");
    }
}
