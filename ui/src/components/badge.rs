//! Status badge for payment rows.

use dioxus::prelude::*;

/// Visual tone of a badge, resolved to a CSS class from the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Muted,
}

impl StatusTone {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "badge-success",
            Self::Warning => "badge-warning",
            Self::Danger => "badge-danger",
            Self::Muted => "badge-muted",
        }
    }
}

/// Maps the raw server status to a display label and tone.
///
/// The match is exact and case-sensitive. Unrecognized statuses keep their
/// raw text with the muted tone; a missing status reads "UNKNOWN".
pub fn status_presentation(status: Option<&str>) -> (String, StatusTone) {
    match status {
        Some("paid") => ("PAID".to_string(), StatusTone::Success),
        Some("pending") => ("PENDING".to_string(), StatusTone::Warning),
        Some("failed") => ("FAILED".to_string(), StatusTone::Danger),
        Some("cancelled") => ("CANCELLED".to_string(), StatusTone::Muted),
        Some(other) => (other.to_string(), StatusTone::Muted),
        None => ("UNKNOWN".to_string(), StatusTone::Muted),
    }
}

/// A small rounded pill with a label on a tone-colored background.
#[component]
pub fn BadgePill(label: String, tone: StatusTone) -> Element {
    let class = format!("badge-pill {}", tone.class());

    rsx! {
        span { class: "{class}", "{label}" }
    }
}
