//! Common test utilities for integration tests
//!
//! Shared fixtures for the analysis service tests.

/// A representative analysis service response body.
pub fn analysis_response_body() -> String {
    serde_json::json!({
        "architectural_risks": ["Session store is single-node"],
        "clarifying_questions": ["Who can reset a password?"],
        "missing_edge_cases": ["network failure on submit"],
        "ambiguous_phrases": ["fast", "user-friendly"],
        "improved_acceptance_criteria": "Given a user...",
        "technical_notes": "Use idempotency keys."
    })
    .to_string()
}
