use serde::{Deserialize, Serialize};

/// Number of question slots in every session record. Extraction pads or
/// truncates to exactly this many entries; an empty string marks an empty
/// slot.
pub const QUESTION_SLOTS: usize = 3;

/// One logged interview-practice interaction: the submitted inputs plus the
/// questions derived from the model reply. Never updated after the
/// write-time timestamp is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub timestamp: String,
    pub company: String,
    pub self_introduction: String,
    pub questions: [String; QUESTION_SLOTS],
}

/// Everything the presentation layer needs to render one submission: the
/// echoed inputs, the untouched model reply (or the inline error text), the
/// extracted questions, and the full history newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewResult {
    pub company: String,
    pub self_introduction: String,
    pub raw_reply: String,
    pub questions: [String; QUESTION_SLOTS],
    pub history: Vec<SessionRecord>,
}

pub fn empty_questions() -> [String; QUESTION_SLOTS] {
    [String::new(), String::new(), String::new()]
}
