/// Data models for faq-service
///
/// This module defines structures for:
/// - Faq: a stored question/answer pair with its per-language translations
/// - TranslationEntry: the translated question/answer pair for one language
/// - FaqView: the wire shape served to clients for a single language
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

/// A stored FAQ record.
///
/// `question` is the natural key used by the public API. `translations`
/// maps a language code to its translated pair; languages absent from the
/// map fall back to the base `question`/`answer` fields on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub translations: Json<HashMap<String, TranslationEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Translated question/answer pair for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub question: String,
    pub answer: String,
}

/// A FAQ as served to clients, resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqView {
    pub question: String,
    pub answer: String,
}

impl Faq {
    /// Resolve this record for `lang`, falling back to the base fields when
    /// no translation is stored for that language.
    pub fn view_for(&self, lang: &str) -> FaqView {
        match self.translations.get(lang) {
            Some(entry) => FaqView {
                question: entry.question.clone(),
                answer: entry.answer.clone(),
            },
            None => FaqView {
                question: self.question.clone(),
                answer: self.answer.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faq() -> Faq {
        let mut translations = HashMap::new();
        translations.insert(
            "es".to_string(),
            TranslationEntry {
                question: "¿Qué es esto?".to_string(),
                answer: "Una prueba".to_string(),
            },
        );

        Faq {
            id: Uuid::new_v4(),
            question: "What is this?".to_string(),
            answer: "A test".to_string(),
            translations: Json(translations),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_view_for_translated_language() {
        let faq = sample_faq();
        let view = faq.view_for("es");
        assert_eq!(view.question, "¿Qué es esto?");
        assert_eq!(view.answer, "Una prueba");
    }

    #[test]
    fn test_view_for_falls_back_to_base_fields() {
        let faq = sample_faq();
        let view = faq.view_for("fr");
        assert_eq!(view.question, "What is this?");
        assert_eq!(view.answer, "A test");
    }

    #[test]
    fn test_faq_view_wire_shape() {
        let view = FaqView {
            question: "Q1".to_string(),
            answer: "A1".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, serde_json::json!({"question": "Q1", "answer": "A1"}));
    }
}
