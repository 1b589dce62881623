use std::sync::{Arc, Mutex};

use scribe_core::{Email, EmailClient};

/// A message handed to [`MockEmailClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

/// Keeps every message instead of sending it. Clones share the outbox.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    outbox: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.outbox
            .lock()
            .map_err(|e| e.to_string())?
            .push(SentEmail {
                recipient: recipient.to_string(),
                subject: subject.to_owned(),
                content: content.to_owned(),
            });
        Ok(())
    }
}
