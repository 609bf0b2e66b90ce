//! Fallback diagnosis path for symptoms with no dataset match

use healthbot_core::{GEMINI_UNAVAILABLE, format_reply};

use super::client::GeminiClient;

/// Build the diagnostic prompt for the given symptom list.
fn build_prompt(symptoms: &str) -> String {
    format!(
        "A user is experiencing these symptoms: {symptoms}.\n\
         Please provide a summary with the following sections:\n\
         1. Most likely disease\n\
         2. Symptoms explained\n\
         3. Recommended medicines or drugs\n\
         4. Precautions or self-care tips\n\
         5. A short description of the condition\n\
         Avoid using ** or bullet points. Format it clearly for display in a chatbot interface."
    )
}

/// Ask Gemini about unmatched symptoms and format the answer.
///
/// Every failure (client not configured, transport error, non-200 status
/// or an unexpected response shape) collapses into the fixed
/// unavailability message. The turn always completes with a reply.
pub async fn diagnose(client: Option<&GeminiClient>, symptoms: &str) -> String {
    let Some(client) = client else {
        tracing::warn!("Gemini client not configured, returning unavailability message");
        return GEMINI_UNAVAILABLE.to_string();
    };

    match client.generate(&build_prompt(symptoms)).await {
        Ok(raw) => format_reply(&raw),
        Err(e) => {
            tracing::warn!(error = %e, "Gemini fallback failed");
            GEMINI_UNAVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_symptoms_and_sections() {
        let prompt = build_prompt("headache, nausea");
        assert!(prompt.starts_with("A user is experiencing these symptoms: headache, nausea."));
        assert!(prompt.contains("1. Most likely disease"));
        assert!(prompt.contains("5. A short description of the condition"));
    }

    #[tokio::test]
    async fn missing_client_yields_unavailability_message() {
        assert_eq!(diagnose(None, "headache, nausea").await, GEMINI_UNAVAILABLE);
    }
}
