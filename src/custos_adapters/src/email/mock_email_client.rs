use std::sync::Arc;

use tokio::sync::RwLock;

use custos_core::{EmailClient, EmailClientError, OutboundEmail};

/// Email sink that records every message instead of delivering it. The
/// black-box tests read the recorded messages back to follow the emailed
/// links.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), EmailClientError> {
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}
