//! AI Suggestion Proxy
//!
//! Outbound client for the external completion service. No retries and
//! no streaming; one request, one suggestion, with a configurable
//! timeout.

/// Chat-completions client
pub mod client;

pub use client::SuggestionClient;
