//! Pharmacy route handlers.
//!
//! The pharmacy vertical ships as a bundled directory (it has no catalog
//! table) plus the prescription hand-off: the shopper photographs a
//! prescription client-side and opens a WhatsApp conversation with a fixed
//! opener; the image itself travels in that conversation, not through us.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::services::whatsapp;
use crate::state::AppState;

/// A pharmacy directory entry.
#[derive(Debug, Clone, Serialize)]
pub struct Pharmacy {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub delivery_time: &'static str,
    pub is_open: bool,
}

/// The bundled pharmacy directory.
const PHARMACIES: &[Pharmacy] = &[
    Pharmacy {
        id: "1",
        name: "صيدلية الفهد",
        image: "/uploads/pharmacies/fahd.jpg",
        rating: 4.8,
        reviews: 156,
        delivery_time: "20-35 دقيقة",
        is_open: true,
    },
    Pharmacy {
        id: "2",
        name: "صيدلية الدواء",
        image: "/uploads/pharmacies/dawa.jpg",
        rating: 4.6,
        reviews: 124,
        delivery_time: "25-40 دقيقة",
        is_open: true,
    },
    Pharmacy {
        id: "3",
        name: "صيدلية الشفاء",
        image: "/uploads/pharmacies/shifa.jpg",
        rating: 4.5,
        reviews: 98,
        delivery_time: "30-45 دقيقة",
        is_open: false,
    },
    Pharmacy {
        id: "4",
        name: "صيدلية الحياة",
        image: "/uploads/pharmacies/hayat.jpg",
        rating: 4.7,
        reviews: 112,
        delivery_time: "15-30 دقيقة",
        is_open: true,
    },
];

/// Prescription hand-off payload.
#[derive(Debug, Serialize)]
pub struct PrescriptionView {
    pub whatsapp_url: String,
}

/// Pharmacy listing.
#[instrument]
pub async fn index() -> Json<Vec<Pharmacy>> {
    Json(PHARMACIES.to_vec())
}

/// Hand-off link for a prescription order.
#[instrument(skip(state))]
pub async fn prescription(State(state): State<AppState>) -> Result<Json<PrescriptionView>> {
    let url = whatsapp::wa_link(
        &state.config().whatsapp_number,
        whatsapp::prescription_message(),
    );
    Ok(Json(PrescriptionView { whatsapp_url: url }))
}
