use serde::Serialize;
use thiserror::Error;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub fn fallback_text(link: &str) -> String {
    format!("Your pitch deck is ready! Share this global link: {}", link)
}

/// Why a confirmation message fell back to the fixed template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionFailure {
    #[error("no text-generation credential configured")]
    MissingCredential,

    #[error("text-generation request failed: {0}")]
    RequestFailed(String),

    #[error("text-generation response had no usable content")]
    EmptyCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationMessage {
    Generated(String),
    Fallback {
        text: String,
        reason: CompositionFailure,
    },
}

impl ConfirmationMessage {
    pub fn fallback(link: &str, reason: CompositionFailure) -> Self {
        ConfirmationMessage::Fallback {
            text: fallback_text(link),
            reason,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ConfirmationMessage::Generated(text) => text,
            ConfirmationMessage::Fallback { text, .. } => text,
        }
    }

    pub fn source(&self) -> MessageSource {
        match self {
            ConfirmationMessage::Generated(_) => MessageSource::Generated,
            ConfirmationMessage::Fallback { .. } => MessageSource::Fallback,
        }
    }

    pub fn fallback_reason(&self) -> Option<&CompositionFailure> {
        match self {
            ConfirmationMessage::Generated(_) => None,
            ConfirmationMessage::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Two-message prompt sent to the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    pub fn confirmation(link: &str, file_name: &str) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: format!(
                "A pitch deck file named '{}' has been uploaded and converted to a public link. \
                 Produce a concise confirmation message for the user with the link prominently \
                 shown. Use a friendly tone.\n\nLink: {}",
                file_name, link
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_text_is_exact() {
        assert_eq!(
            fallback_text("https://gofile.io/d/abc123"),
            "Your pitch deck is ready! Share this global link: https://gofile.io/d/abc123"
        );
    }

    #[test]
    fn confirmation_prompt_embeds_link_and_file_name() {
        let prompt = ChatPrompt::confirmation("https://gofile.io/d/abc123", "deck.pdf");

        assert_eq!(prompt.system, "You are a helpful assistant.");
        assert!(prompt.user.starts_with("A pitch deck file named 'deck.pdf' has been uploaded"));
        assert!(prompt.user.ends_with("Use a friendly tone.\n\nLink: https://gofile.io/d/abc123"));
    }

    #[test]
    fn fallback_exposes_reason_and_source() {
        let message = ConfirmationMessage::fallback("x", CompositionFailure::MissingCredential);

        assert_eq!(message.source(), MessageSource::Fallback);
        assert_eq!(
            message.fallback_reason(),
            Some(&CompositionFailure::MissingCredential)
        );
        assert_eq!(message.text(), "Your pitch deck is ready! Share this global link: x");
    }
}
