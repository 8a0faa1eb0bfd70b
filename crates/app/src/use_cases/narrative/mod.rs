//! Narrative questionnaire use cases.

mod finalize_story;
mod reset_story;
mod select_path;
mod submit_answer;

pub use finalize_story::{clean_narrative, FinalizeStory};
pub use reset_story::ResetStory;
pub use select_path::SelectPath;
pub use submit_answer::SubmitAnswer;
