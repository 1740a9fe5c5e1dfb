use std::sync::Arc;

use chrono::Local;
use tracing::warn;

use crate::extractor::QuestionExtractor;
use crate::history::{HistoryError, HistoryStore};
use crate::llm::{
    INTERVIEW_COACH_SYSTEM_PROMPT, LlmGateway, LlmGatewayRequest, interview_questions_prompt,
};
use crate::models::{InterviewResult, SessionRecord, empty_questions};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Orchestrates one practice session: prompt the collaborator, extract the
/// questions, append the session record, and hand back the bundle with the
/// full history attached. Collaborators are injected at construction.
pub struct InterviewService {
    gateway: Arc<dyn LlmGateway>,
    history: HistoryStore,
    extractor: QuestionExtractor,
}

impl InterviewService {
    pub fn new(gateway: Arc<dyn LlmGateway>, history: HistoryStore) -> Self {
        Self::with_extractor(gateway, history, QuestionExtractor::default())
    }

    pub fn with_extractor(
        gateway: Arc<dyn LlmGateway>,
        history: HistoryStore,
        extractor: QuestionExtractor,
    ) -> Self {
        Self {
            gateway,
            history,
            extractor,
        }
    }

    /// Runs one generation attempt. A failed collaborator call degrades to
    /// an inline error message with empty question slots; the attempt is
    /// still logged. History log failures propagate.
    pub async fn generate(
        &self,
        company: &str,
        self_introduction: &str,
    ) -> Result<InterviewResult, HistoryError> {
        let request = LlmGatewayRequest {
            system_prompt: INTERVIEW_COACH_SYSTEM_PROMPT.to_string(),
            user_prompt: interview_questions_prompt(company, self_introduction),
        };

        let (raw_reply, questions) = match self.gateway.generate(request).await {
            Ok(response) => {
                let reply = response.content.trim().to_string();
                let questions = self.extractor.extract(&reply);
                (reply, questions)
            }
            Err(err) => {
                warn!("question generation failed: {err}");
                (format!("エラーが発生しました: {err}"), empty_questions())
            }
        };

        let record = SessionRecord {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            company: company.to_string(),
            self_introduction: self_introduction.to_string(),
            questions: questions.clone(),
        };
        self.history.append(&record)?;

        Ok(InterviewResult {
            company: record.company,
            self_introduction: record.self_introduction,
            raw_reply,
            questions,
            history: self.history.read_all_newest_first()?,
        })
    }

    /// Newest-first history for the read-only listing route.
    pub fn history(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        self.history.read_all_newest_first()
    }
}
