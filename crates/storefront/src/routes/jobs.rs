//! Job board route handler.
//!
//! The job board is curated editorial content shipped in code, not a
//! database table; applicants contact the team over the hand-off channel.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// One open position.
#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub title: &'static str,
    pub description: &'static str,
}

/// A group of related positions.
#[derive(Debug, Clone, Serialize)]
pub struct JobCategory {
    pub name: &'static str,
    pub jobs: &'static [JobPosting],
}

/// Job board payload.
#[derive(Debug, Serialize)]
pub struct JobsView {
    pub categories: Vec<JobCategory>,
    pub contact_url: String,
}

/// The bundled job board.
const JOB_CATEGORIES: &[JobCategory] = &[
    JobCategory {
        name: "مطاعم وكافيهات",
        jobs: &[
            JobPosting {
                title: "شيف",
                description: "خبرة لا تقل عن 3 سنوات في المطاعم الكبرى",
            },
            JobPosting {
                title: "ويتر/ويترس",
                description: "دوام كامل أو جزئي، خبرة سابقة مطلوبة",
            },
            JobPosting {
                title: "كاشير",
                description: "إجادة التعامل مع الحاسوب وأنظمة المبيعات",
            },
        ],
    },
    JobCategory {
        name: "توصيل",
        jobs: &[
            JobPosting {
                title: "سائق دراجة",
                description: "امتلاك دراجة نارية ورخصة قيادة سارية",
            },
            JobPosting {
                title: "مندوب توصيل",
                description: "معرفة جيدة بالمناطق المحيطة",
            },
        ],
    },
    JobCategory {
        name: "إدارة ومبيعات",
        jobs: &[
            JobPosting {
                title: "مدير فرع",
                description: "خبرة إدارية لا تقل عن 5 سنوات",
            },
            JobPosting {
                title: "مندوب مبيعات",
                description: "قدرة على التواصل وإقناع العملاء",
            },
            JobPosting {
                title: "خدمة عملاء",
                description: "مهارات تواصل ممتازة واتقان استخدام الكمبيوتر",
            },
        ],
    },
];

/// Job board with a direct contact link for applicants.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<JobsView>> {
    // A plain contact link - applicants start the conversation themselves.
    let contact_url = format!("https://wa.me/{}", state.config().whatsapp_number);

    Ok(Json(JobsView {
        categories: JOB_CATEGORIES.to_vec(),
        contact_url,
    }))
}
