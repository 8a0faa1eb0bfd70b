//! Finalize story use case - turns the answered questionnaire into text.

use std::sync::Arc;

use mojomint_domain::{DomainError, WalletAddress};

use crate::infrastructure::ports::NarrativePort;
use crate::use_cases::error::WorkflowError;
use crate::use_cases::session::SessionStore;

/// Asks the narrative service for the finalized text once every prompt
/// has an answer, cleans it up, and stores it on the session.
pub struct FinalizeStory {
    store: Arc<SessionStore>,
    narrative: Arc<dyn NarrativePort>,
}

impl FinalizeStory {
    pub fn new(store: Arc<SessionStore>, narrative: Arc<dyn NarrativePort>) -> Self {
        Self { store, narrative }
    }

    pub async fn execute(&self, address: &WalletAddress) -> Result<String, WorkflowError> {
        self.store
            .read_slot(address, |slot| match &slot.session {
                None => Err(WorkflowError::NoSelection),
                Some(session) if !session.is_complete() => {
                    Err(WorkflowError::Domain(DomainError::StoryIncomplete {
                        answered: session.answers().len(),
                        expected: session.path().prompt_count(),
                    }))
                }
                Some(_) => Ok(()),
            })
            .unwrap_or(Err(WorkflowError::NoSelection))?;

        let raw = self.narrative.finalize(address).await?;
        let cleaned = clean_narrative(&raw);

        self.store.with_slot(address, |slot| {
            let session = slot.session.as_mut().ok_or(WorkflowError::NoSelection)?;
            session.set_final_narrative(cleaned.clone())?;
            Ok::<(), WorkflowError>(())
        })?;

        tracing::info!(user = %address, chars = cleaned.len(), "narrative finalized");
        Ok(cleaned)
    }
}

/// Trim the service's text and close it with an ellipsis when it does
/// not already end in sentence punctuation.
pub fn clean_narrative(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockNarrativePort;
    use mojomint_domain::{NarrativePath, NarrativeSession};

    fn user() -> WalletAddress {
        WalletAddress::parse("0xabc123").unwrap()
    }

    fn store_with_complete_session() -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            let mut session = NarrativeSession::new(NarrativePath::DigitalDreamer);
            for i in 0..5 {
                session.record_answer(format!("a{i}")).expect("record");
            }
            slot.session = Some(session);
        });
        store
    }

    #[test]
    fn cleanup_appends_ellipsis_without_trailing_punctuation() {
        assert_eq!(
            clean_narrative("The dog ran. The cat sat"),
            "The dog ran. The cat sat..."
        );
        assert_eq!(clean_narrative("It ended well."), "It ended well.");
        assert_eq!(clean_narrative("  spaced out "), "spaced out...");
    }

    #[tokio::test]
    async fn finalizes_a_complete_story_and_stores_it() {
        let store = store_with_complete_session();
        let mut narrative = MockNarrativePort::new();
        narrative
            .expect_finalize()
            .times(1)
            .returning(|_| Ok("The dog ran. The cat sat".to_string()));

        let use_case = FinalizeStory::new(store.clone(), Arc::new(narrative));
        let text = use_case.execute(&user()).await.unwrap();

        assert_eq!(text, "The dog ran. The cat sat...");
        let stored = store
            .read_slot(&user(), |slot| {
                slot.session
                    .as_ref()
                    .and_then(|s| s.final_narrative().map(str::to_string))
            })
            .flatten();
        assert_eq!(stored.as_deref(), Some("The dog ran. The cat sat..."));
    }

    #[tokio::test]
    async fn refuses_to_finalize_an_incomplete_story() {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            slot.session = Some(NarrativeSession::new(NarrativePath::DigitalDreamer));
        });
        let narrative = MockNarrativePort::new();

        let use_case = FinalizeStory::new(store, Arc::new(narrative));
        let result = use_case.execute(&user()).await;

        assert!(matches!(
            result,
            Err(WorkflowError::Domain(DomainError::StoryIncomplete {
                answered: 0,
                expected: 5
            }))
        ));
    }
}
