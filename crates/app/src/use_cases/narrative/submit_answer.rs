//! Submit answer use case - one questionnaire step.

use std::sync::Arc;

use mojomint_domain::{DomainError, WalletAddress};

use crate::infrastructure::ports::NarrativePort;
use crate::use_cases::error::WorkflowError;
use crate::use_cases::session::SessionStore;

/// Sends one answer to the narrative service and records it locally.
///
/// The local append happens only after the remote update succeeds, so
/// `answers.length` always equals the number of prompts the service has
/// accepted.
pub struct SubmitAnswer {
    store: Arc<SessionStore>,
    narrative: Arc<dyn NarrativePort>,
}

impl SubmitAnswer {
    pub fn new(store: Arc<SessionStore>, narrative: Arc<dyn NarrativePort>) -> Self {
        Self { store, narrative }
    }

    /// Returns the next prompt, or None when the branch is complete.
    pub async fn execute(
        &self,
        address: &WalletAddress,
        answer: &str,
    ) -> Result<Option<&'static str>, WorkflowError> {
        // Validate against the local session before touching the network.
        self.store
            .read_slot(address, |slot| match &slot.session {
                None => Err(WorkflowError::NoSelection),
                Some(session) if session.is_complete() => {
                    Err(WorkflowError::Domain(DomainError::BranchExhausted {
                        path: session.path().key(),
                        prompt_count: session.path().prompt_count(),
                    }))
                }
                Some(_) => Ok(()),
            })
            .unwrap_or(Err(WorkflowError::NoSelection))?;
        if answer.trim().is_empty() {
            return Err(WorkflowError::Domain(DomainError::Validation(
                "answer must not be empty".into(),
            )));
        }

        self.narrative.update(address, answer).await?;

        self.store.with_slot(address, |slot| {
            let session = slot.session.as_mut().ok_or(WorkflowError::NoSelection)?;
            session.record_answer(answer)?;
            tracing::debug!(
                user = %address,
                answered = session.answers().len(),
                of = session.path().prompt_count(),
                "answer recorded"
            );
            Ok(session.next_prompt())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockNarrativePort, RemoteServiceError};
    use mojomint_domain::{NarrativePath, NarrativeSession};

    fn user() -> WalletAddress {
        WalletAddress::parse("0xabc123").unwrap()
    }

    fn store_with_session(path: NarrativePath) -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new());
        store.with_slot(&user(), |slot| {
            slot.session = Some(NarrativeSession::new(path));
        });
        store
    }

    #[tokio::test]
    async fn appends_locally_only_after_remote_update_succeeds() {
        let store = store_with_session(NarrativePath::DigitalDreamer);
        let mut narrative = MockNarrativePort::new();
        narrative.expect_update().times(1).returning(|_, _| Ok(()));

        let use_case = SubmitAnswer::new(store.clone(), Arc::new(narrative));
        let next = use_case.execute(&user(), "in a basement studio").await.unwrap();

        assert_eq!(next, Some("What pulls you away from the familiar?"));
        let answered = store
            .read_slot(&user(), |slot| {
                slot.session.as_ref().map(|s| s.answers().len())
            })
            .flatten();
        assert_eq!(answered, Some(1));
    }

    #[tokio::test]
    async fn remote_failure_leaves_answers_untouched() {
        let store = store_with_session(NarrativePath::DigitalDreamer);
        let mut narrative = MockNarrativePort::new();
        narrative
            .expect_update()
            .returning(|_, _| Err(RemoteServiceError::status("narrative", 500, "boom")));

        let use_case = SubmitAnswer::new(store.clone(), Arc::new(narrative));
        let result = use_case.execute(&user(), "lost answer").await;

        assert!(matches!(result, Err(WorkflowError::Service(_))));
        let answered = store
            .read_slot(&user(), |slot| {
                slot.session.as_ref().map(|s| s.answers().len())
            })
            .flatten();
        assert_eq!(answered, Some(0));
    }

    #[tokio::test]
    async fn refuses_answers_without_a_session() {
        let store = Arc::new(SessionStore::new());
        let narrative = MockNarrativePort::new();

        let use_case = SubmitAnswer::new(store, Arc::new(narrative));
        let result = use_case.execute(&user(), "hello").await;

        assert!(matches!(result, Err(WorkflowError::NoSelection)));
    }

    #[tokio::test]
    async fn refuses_answers_past_the_end_of_the_branch() {
        let store = store_with_session(NarrativePath::DigitalDreamer);
        store.with_slot(&user(), |slot| {
            let session = slot.session.as_mut().expect("session");
            for i in 0..5 {
                session.record_answer(format!("a{i}")).expect("record");
            }
        });
        let narrative = MockNarrativePort::new();

        let use_case = SubmitAnswer::new(store, Arc::new(narrative));
        let result = use_case.execute(&user(), "extra").await;

        assert!(matches!(
            result,
            Err(WorkflowError::Domain(DomainError::BranchExhausted { .. }))
        ));
    }
}
