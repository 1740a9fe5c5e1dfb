/// Role description for the text-generation collaborator: a job-hunting
/// support professional.
pub const INTERVIEW_COACH_SYSTEM_PROMPT: &str = "あなたは就活支援のプロです。";

/// Asks for three anticipated interview questions, embedding the company
/// name and self-introduction verbatim.
pub fn interview_questions_prompt(company: &str, self_introduction: &str) -> String {
    format!(
        "以下は就活の面接練習アプリです。企業名と自己紹介に応じて、想定質問を3つ生成してください。\n企業名：{company}\n自己紹介：{self_introduction}"
    )
}
