use crate::models::{Faq, TranslationEntry};
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;

/// List all FAQs in insertion order.
pub async fn list_faqs(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
    let faqs = sqlx::query_as::<_, Faq>(
        r#"
        SELECT id, question, answer, translations, created_at, updated_at
        FROM faqs
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(faqs)
}

/// Find a FAQ by its question (the natural key).
pub async fn find_faq_by_question(
    pool: &PgPool,
    question: &str,
) -> Result<Option<Faq>, sqlx::Error> {
    let faq = sqlx::query_as::<_, Faq>(
        r#"
        SELECT id, question, answer, translations, created_at, updated_at
        FROM faqs
        WHERE question = $1
        "#,
    )
    .bind(question)
    .fetch_optional(pool)
    .await?;

    Ok(faq)
}

/// Insert a new FAQ with its precomputed translations.
/// Fails with a unique violation if the question already exists.
pub async fn insert_faq(
    pool: &PgPool,
    question: &str,
    answer: &str,
    translations: &HashMap<String, TranslationEntry>,
) -> Result<Faq, sqlx::Error> {
    let faq = sqlx::query_as::<_, Faq>(
        r#"
        INSERT INTO faqs (question, answer, translations)
        VALUES ($1, $2, $3)
        RETURNING id, question, answer, translations, created_at, updated_at
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(Json(translations))
    .fetch_one(pool)
    .await?;

    Ok(faq)
}

/// Replace the answer and translations of the FAQ matching `question`.
/// Returns `None` when no record matched (no upsert).
pub async fn update_faq_answer(
    pool: &PgPool,
    question: &str,
    answer: &str,
    translations: &HashMap<String, TranslationEntry>,
) -> Result<Option<Faq>, sqlx::Error> {
    let faq = sqlx::query_as::<_, Faq>(
        r#"
        UPDATE faqs
        SET answer = $2, translations = $3, updated_at = NOW()
        WHERE question = $1
        RETURNING id, question, answer, translations, created_at, updated_at
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(Json(translations))
    .fetch_optional(pool)
    .await?;

    Ok(faq)
}

/// Delete the FAQ matching `question`. Returns whether a record was removed.
pub async fn delete_faq_by_question(pool: &PgPool, question: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM faqs WHERE question = $1")
        .bind(question)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
