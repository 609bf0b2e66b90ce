//! Reply rendering: structured record replies, the follow-up prompt, and
//! the fallback formatter applied to generated free text.

use crate::record::DiseaseRecord;

/// Fixed reply when the text-generation collaborator fails.
pub const GEMINI_UNAVAILABLE: &str =
    "⚠️ Gemini could not provide an answer right now. Please try again later.";

/// Lines shorter than this (after trimming) are too thin to count as
/// description text.
const MIN_DESCRIPTION_CHARS: usize = 15;

/// Render a matched dataset record as the bot reply fragment.
pub fn render_record(record: &DiseaseRecord) -> String {
    format!(
        "<b>🦠 Disease:</b> {}<br>\
         <b>🔍 Symptoms:</b> {}<br>\
         <b>💊 Medicine:</b> {}<br>\
         <b>🛡️ Precautions:</b> {}",
        record.name, record.symptoms, record.medicine, record.precautions
    )
}

/// Render the clarification prompt for a single recognized symptom.
pub fn followup_prompt(input: &str) -> String {
    format!(
        "<b>You entered only:</b> {input}<br>\
         This symptom can relate to many diseases.<br>\
         ⚠️ Please provide more symptoms (e.g., headache, fever, joint pain) for better accuracy."
    )
}

/// Accumulators for the labeled output sections.
#[derive(Default)]
struct Buckets {
    disease: String,
    symptoms: String,
    medicine: String,
    precautions: String,
    description: String,
}

fn append(bucket: &mut String, line: &str) {
    if !bucket.is_empty() {
        bucket.push(' ');
    }
    bucket.push_str(line);
}

/// Format free text from the text-generation collaborator into the fixed
/// labeled fragment.
///
/// Markdown emphasis and bullet markers are stripped, then each line is
/// classified into at most one bucket by case-insensitive keyword scan.
/// The keyword lists, their priority order, the length threshold, and the
/// rendered labels are a compatibility contract with the original
/// formatter and must not be tuned.
pub fn format_reply(raw: &str) -> String {
    let cleaned = raw.replace("**", "").replace('*', "").replace('•', "-");

    let mut buckets = Buckets::default();
    for line in cleaned.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if lower.contains("disease") {
            append(&mut buckets.disease, trimmed);
        } else if lower.contains("symptom") {
            append(&mut buckets.symptoms, trimmed);
        } else if lower.contains("medicine") || lower.contains("drug") {
            append(&mut buckets.medicine, trimmed);
        } else if lower.contains("precaution") || lower.contains("care") {
            append(&mut buckets.precautions, trimmed);
        } else if trimmed.chars().count() > MIN_DESCRIPTION_CHARS {
            append(&mut buckets.description, trimmed);
        }
    }

    let mut formatted = String::new();
    for (label, text) in [
        ("🦠 Disease", &buckets.disease),
        ("🔍 Symptoms", &buckets.symptoms),
        ("💊 Recommended Medicine", &buckets.medicine),
        ("🛡️ Precautions", &buckets.precautions),
        ("📖 Description", &buckets.description),
    ] {
        if !text.is_empty() {
            formatted.push_str(&format!("<b>{label}:</b> {text}<br>"));
        }
    }

    if formatted.is_empty() {
        cleaned.trim().to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_extracted_in_fixed_order() {
        let raw = "Most likely disease: Influenza\n\
                   Symptoms explained: fever and cough are typical\n\
                   Recommended drugs: oseltamivir\n\
                   Self-care tips: rest and fluids\n\
                   Influenza is a contagious respiratory infection.";
        let out = format_reply(raw);

        assert_eq!(
            out,
            "<b>🦠 Disease:</b> Most likely disease: Influenza<br>\
             <b>🔍 Symptoms:</b> Symptoms explained: fever and cough are typical<br>\
             <b>💊 Recommended Medicine:</b> Recommended drugs: oseltamivir<br>\
             <b>🛡️ Precautions:</b> Self-care tips: rest and fluids<br>\
             <b>📖 Description:</b> Influenza is a contagious respiratory infection.<br>"
        );
    }

    #[test]
    fn markdown_artifacts_are_stripped() {
        let out = format_reply("**Disease:** *Dengue*\n• Symptoms: fever, rash");
        assert!(out.contains("<b>🦠 Disease:</b> Disease: Dengue<br>"));
        assert!(out.contains("<b>🔍 Symptoms:</b> - Symptoms: fever, rash<br>"));
        assert!(!out.contains('*'));
        assert!(!out.contains('•'));
    }

    #[test]
    fn first_keyword_wins_per_line() {
        // "disease" outranks "symptom" even when both appear.
        let out = format_reply("This disease causes many symptoms in most patients");
        assert!(out.starts_with("<b>🦠 Disease:</b>"));
        assert!(!out.contains("🔍"));
    }

    #[test]
    fn buckets_accumulate_across_the_text() {
        let raw = "Disease: Flu\nlong filler sentence over the limit\nThe disease spreads by air";
        let out = format_reply(raw);
        assert!(out.contains(
            "<b>🦠 Disease:</b> Disease: Flu The disease spreads by air<br>"
        ));
    }

    #[test]
    fn empty_buckets_are_omitted() {
        let out = format_reply("Medicine: paracetamol");
        assert_eq!(out, "<b>💊 Recommended Medicine:</b> Medicine: paracetamol<br>");
    }

    #[test]
    fn short_unlabeled_lines_fall_through_verbatim() {
        // No keyword, every line at most 15 chars: nothing classifies, so
        // the trimmed input comes back unchanged.
        let out = format_reply("  hello there\nok then  ");
        assert_eq!(out, "hello there\nok then");
    }

    #[test]
    fn line_of_exactly_threshold_length_is_not_description() {
        let line = "a".repeat(15);
        assert_eq!(format_reply(&line), line);
        let longer = "a".repeat(16);
        assert_eq!(
            format_reply(&longer),
            format!("<b>📖 Description:</b> {longer}<br>")
        );
    }

    #[test]
    fn already_sectioned_text_formats_idempotently() {
        let raw = "Disease: Influenza\n\
                   Symptoms: fever, cough\n\
                   Medicine: oseltamivir\n\
                   Precautions: rest and fluids\n\
                   A seasonal viral infection of the airways.";
        let out = format_reply(raw);
        assert_eq!(
            out,
            "<b>🦠 Disease:</b> Disease: Influenza<br>\
             <b>🔍 Symptoms:</b> Symptoms: fever, cough<br>\
             <b>💊 Recommended Medicine:</b> Medicine: oseltamivir<br>\
             <b>🛡️ Precautions:</b> Precautions: rest and fluids<br>\
             <b>📖 Description:</b> A seasonal viral infection of the airways.<br>"
        );
    }

    #[test]
    fn followup_prompt_names_the_input() {
        let prompt = followup_prompt("fever");
        assert!(prompt.contains("<b>You entered only:</b> fever<br>"));
        assert!(prompt.contains("Please provide more symptoms"));
    }

    #[test]
    fn record_reply_uses_display_fields() {
        let record = DiseaseRecord::new(
            "Flu".to_string(),
            "fever, cough, headache".to_string(),
            "oseltamivir".to_string(),
            "rest, fluids".to_string(),
        );
        assert_eq!(
            render_record(&record),
            "<b>🦠 Disease:</b> Flu<br>\
             <b>🔍 Symptoms:</b> fever, cough, headache<br>\
             <b>💊 Medicine:</b> oseltamivir<br>\
             <b>🛡️ Precautions:</b> rest, fluids"
        );
    }
}
