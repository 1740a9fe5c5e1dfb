pub mod gateway;
pub mod openai;
pub mod prompts;

pub use gateway::{
    LlmGateway, LlmGatewayError, LlmGatewayFuture, LlmGatewayRequest, LlmGatewayResponse,
    LlmTokenUsage,
};
pub use openai::{OpenAiConfigError, OpenAiGateway, OpenAiGatewayConfig};
pub use prompts::{INTERVIEW_COACH_SYSTEM_PROMPT, interview_questions_prompt};
