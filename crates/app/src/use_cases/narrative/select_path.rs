//! Select path use case - starts a fresh narrative session.

use std::sync::Arc;

use mojomint_domain::{NarrativePath, NarrativeSession, WalletAddress};

use crate::infrastructure::ports::NarrativePort;
use crate::use_cases::error::WorkflowError;
use crate::use_cases::session::SessionStore;

/// Starts a session on the chosen story branch.
///
/// Selecting a path replaces any existing session for the identity,
/// remote state included, so answers never leak between branches.
pub struct SelectPath {
    store: Arc<SessionStore>,
    narrative: Arc<dyn NarrativePort>,
}

impl SelectPath {
    pub fn new(store: Arc<SessionStore>, narrative: Arc<dyn NarrativePort>) -> Self {
        Self { store, narrative }
    }

    /// Returns the first prompt of the chosen branch.
    pub async fn execute(
        &self,
        address: &WalletAddress,
        path: NarrativePath,
    ) -> Result<&'static str, WorkflowError> {
        // Clear remote state first; a failed reset leaves the local
        // session untouched so the user can retry.
        self.narrative.reset(address).await?;

        self.store.with_slot(address, |slot| {
            slot.session = Some(NarrativeSession::new(path));
            slot.attempt = None;
        });

        tracing::info!(user = %address, path = path.key(), "narrative path selected");

        path.prompts().first().copied().ok_or_else(|| {
            WorkflowError::Unknown(format!("branch {} has no prompts", path.key()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockNarrativePort, RemoteServiceError};

    fn user() -> WalletAddress {
        WalletAddress::parse("0xabc123").unwrap()
    }

    #[tokio::test]
    async fn selecting_a_path_resets_remote_then_creates_session() {
        let store = Arc::new(SessionStore::new());
        let mut narrative = MockNarrativePort::new();
        narrative.expect_reset().times(1).returning(|_| Ok(()));

        let use_case = SelectPath::new(store.clone(), Arc::new(narrative));
        let prompt = use_case
            .execute(&user(), NarrativePath::DigitalDreamer)
            .await
            .unwrap();

        assert_eq!(prompt, "Where does your story begin?");
        let path = store
            .read_slot(&user(), |slot| {
                slot.session.as_ref().map(|s| s.path())
            })
            .flatten();
        assert_eq!(path, Some(NarrativePath::DigitalDreamer));
    }

    #[tokio::test]
    async fn failed_remote_reset_leaves_existing_session() {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            slot.session = Some(NarrativeSession::new(NarrativePath::NeonProphet));
        });

        let mut narrative = MockNarrativePort::new();
        narrative
            .expect_reset()
            .returning(|_| Err(RemoteServiceError::transport("narrative", "down")));

        let use_case = SelectPath::new(store.clone(), Arc::new(narrative));
        let result = use_case
            .execute(&user(), NarrativePath::DigitalDreamer)
            .await;

        assert!(result.is_err());
        let path = store
            .read_slot(&user(), |slot| {
                slot.session.as_ref().map(|s| s.path())
            })
            .flatten();
        assert_eq!(path, Some(NarrativePath::NeonProphet));
    }
}
