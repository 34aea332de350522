/// FAQ handlers - HTTP endpoints for FAQ operations
use crate::cache::FaqCache;
use crate::config::LanguageConfig;
use crate::error::{AppError, Result};
use crate::services::FaqService;
use crate::translation::TranslationClient;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ListFaqsQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFaqRequest {
    #[validate(length(min = 1))]
    pub question: String,

    #[validate(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFaqRequest {
    #[validate(length(min = 1))]
    pub answer: String,
}

/// List FAQs resolved for the requested language (default base language)
pub async fn list_faqs(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<FaqCache>>,
    translator: web::Data<Arc<TranslationClient>>,
    languages: web::Data<LanguageConfig>,
    query: web::Query<ListFaqsQuery>,
) -> Result<HttpResponse> {
    let service = FaqService::with_cache(
        (**pool).clone(),
        cache.get_ref().clone(),
        translator.get_ref().clone(),
        languages.get_ref().clone(),
    );
    let views = service
        .list_faqs(query.lang.as_deref().unwrap_or_default())
        .await?;

    Ok(HttpResponse::Ok().json(views))
}

/// Add a new FAQ
pub async fn create_faq(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<FaqCache>>,
    translator: web::Data<Arc<TranslationClient>>,
    languages: web::Data<LanguageConfig>,
    req: web::Json<CreateFaqRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FaqService::with_cache(
        (**pool).clone(),
        cache.get_ref().clone(),
        translator.get_ref().clone(),
        languages.get_ref().clone(),
    );
    service.create_faq(&req.question, &req.answer).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "FAQ added successfully"
    })))
}

/// Update the answer of an existing FAQ
pub async fn update_faq(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<FaqCache>>,
    translator: web::Data<Arc<TranslationClient>>,
    languages: web::Data<LanguageConfig>,
    question: web::Path<String>,
    req: web::Json<UpdateFaqRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FaqService::with_cache(
        (**pool).clone(),
        cache.get_ref().clone(),
        translator.get_ref().clone(),
        languages.get_ref().clone(),
    );
    service.update_faq(&question, &req.answer).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "FAQ updated successfully"
    })))
}

/// Delete a FAQ
pub async fn delete_faq(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<FaqCache>>,
    translator: web::Data<Arc<TranslationClient>>,
    languages: web::Data<LanguageConfig>,
    question: web::Path<String>,
) -> Result<HttpResponse> {
    let service = FaqService::with_cache(
        (**pool).clone(),
        cache.get_ref().clone(),
        translator.get_ref().clone(),
        languages.get_ref().clone(),
    );
    service.delete_faq(&question).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "FAQ deleted successfully"
    })))
}
