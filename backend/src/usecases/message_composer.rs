use crates::domain::{
    repositories::text_generation::TextGenerationClient,
    value_objects::{
        api_key::ApiKey,
        confirmation::{ChatPrompt, CompositionFailure, ConfirmationMessage},
    },
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds the confirmation shown under the link. Never fails: every problem becomes a
/// templated fallback that records why.
pub struct MessageComposer<T>
where
    T: TextGenerationClient + Send + Sync + 'static,
{
    text_client: Arc<T>,
}

impl<T> MessageComposer<T>
where
    T: TextGenerationClient + Send + Sync + 'static,
{
    pub fn new(text_client: Arc<T>) -> Self {
        Self { text_client }
    }

    pub async fn compose(
        &self,
        link: &str,
        file_name: &str,
        credential: Option<&ApiKey>,
    ) -> ConfirmationMessage {
        let Some(credential) = credential else {
            debug!(file_name, "message_composer: no credential, using fallback");
            return ConfirmationMessage::fallback(link, CompositionFailure::MissingCredential);
        };

        let prompt = ChatPrompt::confirmation(link, file_name);

        match self.text_client.complete(credential, &prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(file_name, "message_composer: completion was blank");
                    return ConfirmationMessage::fallback(link, CompositionFailure::EmptyCompletion);
                }
                ConfirmationMessage::Generated(text.to_string())
            }
            Err(err) => {
                warn!(
                    file_name,
                    error = %err,
                    "message_composer: text generation failed, using fallback"
                );
                ConfirmationMessage::fallback(
                    link,
                    CompositionFailure::RequestFailed(err.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        repositories::text_generation::MockTextGenerationClient,
        value_objects::confirmation::MessageSource,
    };

    const LINK: &str = "https://gofile.io/d/abc123";

    #[tokio::test]
    async fn missing_credential_returns_exact_fallback_without_calling_api() {
        let mut text_client = MockTextGenerationClient::new();
        text_client.expect_complete().times(0);

        let composer = MessageComposer::new(Arc::new(text_client));

        for (link, file_name) in [
            (LINK, "deck.pdf"),
            ("https://store1.gofile.io/download/x/y.pptx", "y.pptx"),
            ("l", "f"),
        ] {
            let message = composer.compose(link, file_name, None).await;

            assert_eq!(
                message.text(),
                format!("Your pitch deck is ready! Share this global link: {}", link)
            );
            assert_eq!(
                message.fallback_reason(),
                Some(&CompositionFailure::MissingCredential)
            );
        }
    }

    #[tokio::test]
    async fn returns_trimmed_completion() {
        let mut text_client = MockTextGenerationClient::new();
        text_client
            .expect_complete()
            .withf(|credential, prompt| {
                credential.expose() == "sk-test"
                    && prompt.user.contains("'deck.pdf'")
                    && prompt.user.ends_with(LINK)
            })
            .times(1)
            .returning(|_, _| Ok("\n  Your deck is live at https://gofile.io/d/abc123!  \n".to_string()));

        let composer = MessageComposer::new(Arc::new(text_client));
        let key = ApiKey::parse("sk-test").unwrap();
        let message = composer.compose(LINK, "deck.pdf", Some(&key)).await;

        assert_eq!(
            message,
            ConfirmationMessage::Generated(
                "Your deck is live at https://gofile.io/d/abc123!".to_string()
            )
        );
        assert_eq!(message.source(), MessageSource::Generated);
    }

    #[tokio::test]
    async fn api_error_becomes_fallback() {
        let mut text_client = MockTextGenerationClient::new();
        text_client
            .expect_complete()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("chat completion returned 401: invalid key")));

        let composer = MessageComposer::new(Arc::new(text_client));
        let key = ApiKey::parse("sk-looks-valid").unwrap();
        let message = composer.compose(LINK, "deck.pdf", Some(&key)).await;

        assert_eq!(
            message.text(),
            "Your pitch deck is ready! Share this global link: https://gofile.io/d/abc123"
        );
        assert!(matches!(
            message.fallback_reason(),
            Some(CompositionFailure::RequestFailed(detail)) if detail.contains("401")
        ));
    }

    #[tokio::test]
    async fn blank_completion_becomes_fallback() {
        let mut text_client = MockTextGenerationClient::new();
        text_client
            .expect_complete()
            .returning(|_, _| Ok("   ".to_string()));

        let composer = MessageComposer::new(Arc::new(text_client));
        let key = ApiKey::parse("sk-test").unwrap();
        let message = composer.compose(LINK, "deck.pdf", Some(&key)).await;

        assert_eq!(
            message.fallback_reason(),
            Some(&CompositionFailure::EmptyCompletion)
        );
    }
}
