//! Summary card shown in pairs at the top of the dashboard.

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct InfoCardProps {
    pub title: String,
    pub value: String,
    /// Decorative glyph rendered behind the value.
    pub icon: String,
}

#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        article {
            class: "info-card",
            span {
                class: "info-card-icon",
                aria_hidden: "true",
                "{props.icon}"
            }
            p { class: "info-card-title", "{props.title}" }
            h4 { class: "info-card-value", "{props.value}" }
        }
    }
}
