/// HTTP handlers for FAQ endpoints
///
/// This module contains handlers for:
/// - Listing FAQs resolved for a requested language
/// - Adding, updating, and deleting FAQ records
pub mod faqs;

// Re-export handler functions at module level
pub use faqs::{create_faq, delete_faq, list_faqs, update_faq};
