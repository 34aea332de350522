/// FAQ service - validation, translation fan-out, cached per-language reads
use crate::cache::FaqCache;
use crate::config::LanguageConfig;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Faq, FaqView, TranslationEntry};
use crate::translation::TranslationClient;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

pub struct FaqService {
    pool: PgPool,
    cache: Option<Arc<FaqCache>>,
    translator: Arc<TranslationClient>,
    languages: LanguageConfig,
}

impl FaqService {
    pub fn new(
        pool: PgPool,
        translator: Arc<TranslationClient>,
        languages: LanguageConfig,
    ) -> Self {
        Self {
            pool,
            cache: None,
            translator,
            languages,
        }
    }

    pub fn with_cache(
        pool: PgPool,
        cache: Arc<FaqCache>,
        translator: Arc<TranslationClient>,
        languages: LanguageConfig,
    ) -> Self {
        Self {
            pool,
            cache: Some(cache),
            translator,
            languages,
        }
    }

    fn cache(&self) -> Option<&Arc<FaqCache>> {
        self.cache.as_ref()
    }

    /// List all FAQs resolved for `lang`, read-through cached.
    ///
    /// Cache failures degrade to computing the view from the store; a read
    /// never fails because Redis is unavailable.
    pub async fn list_faqs(&self, lang: &str) -> Result<Vec<FaqView>> {
        let lang = self.normalize_lang(lang);

        if let Some(cache) = self.cache() {
            match cache.get_view(&lang).await {
                Ok(Some(views)) => return Ok(views),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("FAQ cache read failed, serving from store: {}", err);
                }
            }
        }

        let faqs = db::list_faqs(&self.pool).await?;
        let views = resolve_views(&faqs, &lang);

        if let Some(cache) = self.cache() {
            if let Err(err) = cache.put_view(&lang, &views, None).await {
                tracing::debug!(lang = %lang, "FAQ view cache set failed: {}", err);
            }
        }

        Ok(views)
    }

    /// Create a new FAQ: validate, translate into every supported language,
    /// persist, then drop all cached views.
    ///
    /// The fan-out runs before the insert, so any translation failure aborts
    /// the add with nothing persisted.
    pub async fn create_faq(&self, question: &str, answer: &str) -> Result<Faq> {
        let question = require_non_empty("question", question)?;
        let answer = require_non_empty("answer", answer)?;

        let translations = self.translate_all(&question, &answer).await?;

        let faq = db::insert_faq(&self.pool, &question, &answer, &translations)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict(format!("FAQ '{}' already exists", question))
                }
                other => AppError::from(other),
            })?;

        self.invalidate_views().await?;

        Ok(faq)
    }

    /// Replace the answer of an existing FAQ, recomputing its translations.
    /// No upsert: a question with no matching record is NotFound.
    pub async fn update_faq(&self, question: &str, answer: &str) -> Result<Faq> {
        let answer = require_non_empty("answer", answer)?;
        let question = question.trim();

        let translations = self.translate_all(question, &answer).await?;

        match db::update_faq_answer(&self.pool, question, &answer, &translations).await? {
            Some(faq) => {
                self.invalidate_views().await?;
                Ok(faq)
            }
            None => Err(AppError::NotFound(format!(
                "FAQ '{}' does not exist",
                question
            ))),
        }
    }

    /// Delete the FAQ matching `question`, then drop all cached views.
    pub async fn delete_faq(&self, question: &str) -> Result<()> {
        let question = question.trim();

        if !db::delete_faq_by_question(&self.pool, question).await? {
            return Err(AppError::NotFound(format!(
                "FAQ '{}' does not exist",
                question
            )));
        }

        self.invalidate_views().await?;

        Ok(())
    }

    /// Translate a question/answer pair into every supported language.
    ///
    /// Sequential, all-or-nothing: the first failed call aborts the whole
    /// write. The base language is skipped — an absent map entry falls back
    /// to the base fields on read.
    async fn translate_all(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<HashMap<String, TranslationEntry>> {
        let base = self.languages.base.as_str();
        let mut translations = HashMap::new();

        for lang in &self.languages.supported {
            if lang == base {
                continue;
            }

            let translated_question = self
                .translator
                .translate(question, base, lang)
                .await
                .map_err(|e| AppError::TranslationError(e.to_string()))?;
            let translated_answer = self
                .translator
                .translate(answer, base, lang)
                .await
                .map_err(|e| AppError::TranslationError(e.to_string()))?;

            translations.insert(
                lang.clone(),
                TranslationEntry {
                    question: translated_question,
                    answer: translated_answer,
                },
            );
        }

        Ok(translations)
    }

    /// Drop every cached per-language view after a durable write.
    ///
    /// The record is already persisted when this runs; an invalidation
    /// failure surfaces to the caller rather than leaving the stale TTL
    /// window silent.
    async fn invalidate_views(&self) -> Result<()> {
        if let Some(cache) = self.cache() {
            let removed = cache.invalidate_all().await?;
            tracing::debug!("Invalidated {} cached FAQ views after write", removed);
        }
        Ok(())
    }

    fn normalize_lang(&self, lang: &str) -> String {
        let lang = lang.trim().to_ascii_lowercase();
        if lang.is_empty() {
            self.languages.base.clone()
        } else {
            lang
        }
    }
}

/// Project records to their per-language wire shape, falling back to the
/// base fields for languages with no stored translation.
pub fn resolve_views(faqs: &[Faq], lang: &str) -> Vec<FaqView> {
    faqs.iter().map(|faq| faq.view_for(lang)).collect()
}

fn require_non_empty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn faq(question: &str, answer: &str, translations: &[(&str, &str, &str)]) -> Faq {
        let map: HashMap<String, TranslationEntry> = translations
            .iter()
            .map(|(lang, q, a)| {
                (
                    lang.to_string(),
                    TranslationEntry {
                        question: q.to_string(),
                        answer: a.to_string(),
                    },
                )
            })
            .collect();

        Faq {
            id: Uuid::new_v4(),
            question: question.to_string(),
            answer: answer.to_string(),
            translations: Json(map),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_views_uses_translations_when_present() {
        let faqs = vec![faq("Hello?", "World", &[("es", "¿Hola?", "Mundo")])];
        let views = resolve_views(&faqs, "es");
        assert_eq!(views[0].question, "¿Hola?");
        assert_eq!(views[0].answer, "Mundo");
    }

    #[test]
    fn test_resolve_views_falls_back_per_record() {
        let faqs = vec![
            faq("Q1", "A1", &[("fr", "Q1-fr", "A1-fr")]),
            faq("Q2", "A2", &[]),
        ];
        let views = resolve_views(&faqs, "fr");
        assert_eq!(views[0].question, "Q1-fr");
        assert_eq!(views[1].question, "Q2");
        assert_eq!(views[1].answer, "A2");
    }

    #[test]
    fn test_resolve_views_preserves_order() {
        let faqs = vec![faq("Q1", "A1", &[]), faq("Q2", "A2", &[]), faq("Q3", "A3", &[])];
        let questions: Vec<_> = resolve_views(&faqs, "en")
            .into_iter()
            .map(|v| v.question)
            .collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_require_non_empty_rejects_blank() {
        assert!(matches!(
            require_non_empty("question", "   "),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            require_non_empty("answer", ""),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_require_non_empty_trims() {
        assert_eq!(
            require_non_empty("question", "  What?  ").unwrap(),
            "What?"
        );
    }
}
