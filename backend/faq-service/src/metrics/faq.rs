use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Translated-view cache events (hit/miss/error).
    pub static ref FAQ_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "faq_cache_events_total",
        "Translated-view cache events segmented by outcome",
        &["event"]
    )
    .expect("failed to register faq_cache_events_total");

    /// Translated-view cache write results (success/error).
    pub static ref FAQ_CACHE_WRITE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "faq_cache_write_total",
        "Translated-view cache write attempts segmented by outcome",
        &["result"]
    )
    .expect("failed to register faq_cache_write_total");

    /// Upstream translation requests (success/error).
    pub static ref TRANSLATION_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "faq_translation_request_total",
        "Upstream translation requests segmented by outcome",
        &["result"]
    )
    .expect("failed to register faq_translation_request_total");
}
