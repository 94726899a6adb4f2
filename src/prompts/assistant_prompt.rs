use crate::structs::kost::kost_info::KostInfo;

pub const ASSISTANT_PERSONA_RULES: &str = r#"Use a friendly, polite, and slightly casual Indonesian-English mix typical of students (e.g., "Kak", "Sis").
If asked about availability, mention the specific numbers.
If asked for location, guide them to the map section.
Prices are fixed.
Keep answers short (under 3 sentences)."#;

/// Builds the "Mbak Citra" system instruction. Prepended to every upstream
/// request; never shown to the visitor.
pub fn assistant_system_prompt(kost: &KostInfo) -> String {
    let data = serde_json::to_string(kost).unwrap_or_default();

    format!(
        "You are \"Mbak Citra\", the helpful virtual assistant for {}, a female-only student housing near Undip.\n\
         {}\n\
         Only answer questions based on the following data: {}.",
        kost.name, ASSISTANT_PERSONA_RULES, data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::kost_data::KOST_INFO;

    #[test]
    fn prompt_carries_persona_and_business_data() {
        let prompt = assistant_system_prompt(&KOST_INFO);

        assert!(prompt.contains("Mbak Citra"));
        assert!(prompt.contains("Kost Citra & Tiara"));
        // Availability numbers ride along inside the serialized data block.
        assert!(prompt.contains("\"available\":3"));
        assert!(prompt.contains("Citra Standard"));
    }
}
