/// Business logic layer for faq-service
///
/// FAQ service: validation, translation fan-out on write, read-through
/// caching of per-language views, wholesale cache invalidation.
pub mod faqs;

pub use faqs::FaqService;
