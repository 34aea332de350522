/// Database access layer
///
/// Repository functions for the `faqs` table. Queries are plain `sqlx`
/// against PostgreSQL; callers own transaction and error mapping concerns.
pub mod faq_repo;

pub use faq_repo::{
    delete_faq_by_question, find_faq_by_question, insert_faq, list_faqs, update_faq_answer,
};
