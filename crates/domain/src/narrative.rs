//! Narrative session - the questionnaire a user walks through before minting.
//!
//! A session belongs to exactly one connected wallet. It tracks which story
//! branch was chosen, the ordered answers so far, and the finalized text once
//! the remote narrative service has produced it.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the fixed story branches. Each branch carries an ordered list of
/// prompts; the branch is complete when every prompt has an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NarrativePath {
    /// Path A
    DigitalDreamer,
    /// Path B
    SoundAlchemist,
    /// Path C
    NeonProphet,
}

impl NarrativePath {
    pub fn all() -> &'static [NarrativePath] {
        &[
            NarrativePath::DigitalDreamer,
            NarrativePath::SoundAlchemist,
            NarrativePath::NeonProphet,
        ]
    }

    /// Stable short key, as sent to the narrative and reward services.
    pub fn key(&self) -> &'static str {
        match self {
            Self::DigitalDreamer => "A",
            Self::SoundAlchemist => "B",
            Self::NeonProphet => "C",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "A" | "a" => Some(Self::DigitalDreamer),
            "B" | "b" => Some(Self::SoundAlchemist),
            "C" | "c" => Some(Self::NeonProphet),
            _ => None,
        }
    }

    /// Display label, also embedded as a metadata attribute.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DigitalDreamer => "The Digital Dreamer",
            Self::SoundAlchemist => "The Sound Alchemist",
            Self::NeonProphet => "The Neon Prophet",
        }
    }

    /// Ordered prompts for this branch.
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            Self::DigitalDreamer => &[
                "Where does your story begin?",
                "What pulls you away from the familiar?",
                "Who do you meet on the road?",
                "What nearly breaks you?",
                "How does your jam survive?",
            ],
            Self::SoundAlchemist => &[
                "What sound wakes you at night?",
                "Which ingredient is missing from your mix?",
                "Who tries to silence you?",
                "What do you trade for the perfect take?",
                "What plays when the lights come up?",
            ],
            Self::NeonProphet => &[
                "What vision burns behind your eyes?",
                "Which street do you preach on?",
                "Who laughs at your signal?",
                "What happens when the grid goes dark?",
                "What remains glowing at dawn?",
            ],
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts().len()
    }
}

impl std::fmt::Display for NarrativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-identity questionnaire state.
///
/// Answers are append-only until an explicit reset; selecting a new path
/// replaces the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSession {
    path: NarrativePath,
    answers: Vec<String>,
    final_narrative: Option<String>,
}

impl NarrativeSession {
    pub fn new(path: NarrativePath) -> Self {
        Self {
            path,
            answers: Vec::new(),
            final_narrative: None,
        }
    }

    pub fn path(&self) -> NarrativePath {
        self.path
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn final_narrative(&self) -> Option<&str> {
        self.final_narrative.as_deref()
    }

    /// Prompt the user should answer next, or None when the branch is done.
    pub fn next_prompt(&self) -> Option<&'static str> {
        self.path.prompts().get(self.answers.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.path.prompt_count()
    }

    /// Record an answer for the next unanswered prompt.
    pub fn record_answer(&mut self, answer: impl Into<String>) -> Result<(), DomainError> {
        if self.answers.len() >= self.path.prompt_count() {
            return Err(DomainError::BranchExhausted {
                path: self.path.key(),
                prompt_count: self.path.prompt_count(),
            });
        }
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(DomainError::Validation("answer must not be empty".into()));
        }
        self.answers.push(answer);
        Ok(())
    }

    /// Store the finalized text. Only legal once every prompt is answered.
    pub fn set_final_narrative(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        if !self.is_complete() {
            return Err(DomainError::StoryIncomplete {
                answered: self.answers.len(),
                expected: self.path.prompt_count(),
            });
        }
        self.final_narrative = Some(text.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_answers_in_order_up_to_prompt_count() {
        let mut session = NarrativeSession::new(NarrativePath::DigitalDreamer);
        for i in 0..5 {
            assert!(!session.is_complete());
            session.record_answer(format!("answer {i}")).unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(session.answers().len(), 5);
        assert!(matches!(
            session.record_answer("one too many"),
            Err(DomainError::BranchExhausted { .. })
        ));
    }

    #[test]
    fn finalize_requires_all_answers() {
        let mut session = NarrativeSession::new(NarrativePath::NeonProphet);
        session.record_answer("only one").unwrap();
        assert!(matches!(
            session.set_final_narrative("too early"),
            Err(DomainError::StoryIncomplete {
                answered: 1,
                expected: 5
            })
        ));
    }

    #[test]
    fn rejects_blank_answers() {
        let mut session = NarrativeSession::new(NarrativePath::SoundAlchemist);
        assert!(session.record_answer("   ").is_err());
        assert_eq!(session.answers().len(), 0);
    }
}
