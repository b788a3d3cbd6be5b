use crate::models::{ChatMessage, SummaryRequest};

const SYSTEM_PROMPT: &str = r#"You are an expert content summarizer.
Create concise, accurate summaries that preserve key information.
Adapt your style based on the content type.
Always maintain factual accuracy and clarity."#;

/// Translate request parameters into the system and user messages sent to the model
pub fn build_messages(req: &SummaryRequest) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt(req))]
}

fn user_prompt(req: &SummaryRequest) -> String {
    format!(
        "Content Type: {content_type}\n\n\
         Content to summarize:\n{content}\n\n\
         Requirements:\n\
         - Target length: {length} words\n\
         - Writing style: {style}\n\
         - Focus areas: {focus}\n\n\
         Generate a summary that meets these exact requirements.",
        content_type = req.content_type,
        content = req.content,
        length = req.summary_length,
        style = req.style,
        focus = req.focus_points,
    )
}
