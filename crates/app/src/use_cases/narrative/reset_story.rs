//! Reset story use case.

use std::sync::Arc;

use mojomint_domain::WalletAddress;

use crate::infrastructure::ports::NarrativePort;
use crate::use_cases::error::WorkflowError;
use crate::use_cases::session::SessionStore;

/// Clears the narrative session, remote side first.
///
/// One explicit reset operation; the service owns the semantics of what
/// "cleared" means on its side. The cached mint fee survives a reset
/// since it belongs to the wallet, not the story.
pub struct ResetStory {
    store: Arc<SessionStore>,
    narrative: Arc<dyn NarrativePort>,
}

impl ResetStory {
    pub fn new(store: Arc<SessionStore>, narrative: Arc<dyn NarrativePort>) -> Self {
        Self { store, narrative }
    }

    pub async fn execute(&self, address: &WalletAddress) -> Result<(), WorkflowError> {
        self.narrative.reset(address).await?;

        self.store.with_slot(address, |slot| {
            slot.session = None;
            slot.attempt = None;
        });

        tracing::info!(user = %address, "narrative session reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockNarrativePort, RemoteServiceError};
    use mojomint_domain::{NarrativePath, NarrativeSession, Wei};

    fn user() -> WalletAddress {
        WalletAddress::parse("0xabc123").unwrap()
    }

    #[tokio::test]
    async fn reset_clears_local_state_but_keeps_the_fee() {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            slot.session = Some(NarrativeSession::new(NarrativePath::SoundAlchemist));
            slot.cached_fee = Some(Wei(1_000));
        });

        let mut narrative = MockNarrativePort::new();
        narrative.expect_reset().times(1).returning(|_| Ok(()));

        let use_case = ResetStory::new(store.clone(), Arc::new(narrative));
        use_case.execute(&user()).await.unwrap();

        store.read_slot(&user(), |slot| {
            assert!(slot.session.is_none());
            assert_eq!(slot.cached_fee, Some(Wei(1_000)));
        });
    }

    #[tokio::test]
    async fn remote_failure_keeps_local_state() {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            slot.session = Some(NarrativeSession::new(NarrativePath::SoundAlchemist));
        });

        let mut narrative = MockNarrativePort::new();
        narrative
            .expect_reset()
            .returning(|_| Err(RemoteServiceError::transport("narrative", "down")));

        let use_case = ResetStory::new(store.clone(), Arc::new(narrative));
        assert!(use_case.execute(&user()).await.is_err());

        store.read_slot(&user(), |slot| {
            assert!(slot.session.is_some());
        });
    }
}
