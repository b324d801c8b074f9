pub mod fixtures {
    use crate::models::domain::QuestionRecord;

    /// Rows of the sample quiz: question, correct answer, two distractors.
    pub const SAMPLE_ROWS: [[&str; 4]; 5] = [
        ["Capital of France?", "Paris", "Rome", "Berlin"],
        ["Largest planet in the solar system?", "Jupiter", "Mars", "Venus"],
        ["Chemical symbol for gold?", "Au", "Ag", "Gd"],
        ["Author of Hamlet?", "Shakespeare", "Dickens", "Austen"],
        ["Boiling point of water at sea level in Celsius?", "100", "90", "120"],
    ];

    /// The sample quiz as a compact JSON string, as the generator returns it.
    pub fn sample_quiz_json() -> String {
        serde_json::to_string(&SAMPLE_ROWS).expect("sample rows should serialize")
    }

    pub fn sample_records() -> Vec<QuestionRecord> {
        SAMPLE_ROWS
            .iter()
            .map(|[prompt, correct, first, second]| {
                QuestionRecord::new(*prompt, *correct, *first, *second)
                    .expect("sample rows should be valid")
            })
            .collect()
    }

    /// Minimal bytes that pass the PDF header check.
    pub fn pdf_bytes() -> Vec<u8> {
        b"%PDF-1.4\n%test document\n".to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_json_is_compact() {
        let json = sample_quiz_json();
        assert!(json.starts_with(r#"[["Capital of France?","Paris","Rome","Berlin"],"#));
    }

    #[test]
    fn test_sample_records() {
        let records = sample_records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[1].correct_answer(), "Jupiter");
    }
}
