//! HTTP Handlers

use axum::{Json, extract::State};
use dataquery_core::catalog::{self, highlighted_plan, item_count};
use dataquery_core::{HOME_SECTIONS, SectionId};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub bundle_ready: bool,
    /// `valid`, or a short description of what is wrong with the content
    pub catalog: String,
    pub sections: usize,
    pub features: usize,
    pub plans: usize,
    pub testimonials: usize,
    pub highlighted_plan: Option<&'static str>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        bundle_ready: state.bundle_ready(),
        catalog: catalog_status(&catalog::validate()),
        sections: HOME_SECTIONS.len(),
        features: item_count(SectionId::Features),
        plans: item_count(SectionId::Pricing),
        testimonials: item_count(SectionId::Testimonials),
        highlighted_plan: highlighted_plan().map(|plan| plan.name),
    })
}

fn catalog_status(result: &dataquery_core::Result<()>) -> String {
    match result {
        Ok(()) => "valid".into(),
        Err(e) => e.user_message(),
    }
}
