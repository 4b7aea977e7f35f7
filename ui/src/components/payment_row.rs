//! One card in the latest-payments feed.

use dioxus::prelude::*;

use api::dashboard::PaymentRow;
use api::money::Money;

use crate::components::badge::status_presentation;
use crate::components::badge::BadgePill;
use crate::Screen;

/// "{amount} KM" when the backend sent an amount, the "- KM" placeholder
/// otherwise.
fn amount_text(amount: Option<Money>) -> String {
    match amount {
        Some(money) => money.to_string_with_symbol(),
        None => "- KM".to_string(),
    }
}

/// Referent name as-is, "-" when the backend sent none.
fn referent_text(referent: Option<&str>) -> &str {
    referent.unwrap_or("-")
}

/// A clickable payment card. Clicking anywhere on the card navigates to the
/// detail screen of the user the payment belongs to; nothing else changes.
#[component]
pub fn PaymentRowCard(row: PaymentRow) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    let (label, tone) = status_presentation(row.payment_status.as_deref());
    let amount = amount_text(row.amount);
    let referent = referent_text(row.referent_name.as_deref()).to_string();
    let user_id = row.id;

    rsx! {
        article {
            class: "payment-card",
            onclick: move |_| active_screen.set(Screen::UserDetail(user_id)),
            div {
                class: "payment-card-row",
                span {
                    class: "company-name",
                    title: "{row.company_name}",
                    "{row.company_name}"
                }
                BadgePill { label, tone }
            }
            div {
                class: "payment-card-row",
                span { class: "referent-name", "{referent}" }
                span { class: "payment-amount", "{amount}" }
            }
            div {
                class: "payment-card-arrow",
                aria_hidden: "true",
                "›"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::money::Currency;

    #[test]
    fn present_amount_renders_with_km_suffix() {
        let amount = Money::from_float(42.5, Currency::BAM);
        assert_eq!(amount_text(Some(amount)), "42.50 KM");
    }

    #[test]
    fn missing_amount_renders_placeholder() {
        assert_eq!(amount_text(None), "- KM");
    }

    #[test]
    fn referent_defaults_to_dash() {
        assert_eq!(referent_text(Some("Amira Begić")), "Amira Begić");
        assert_eq!(referent_text(None), "-");
    }
}
