//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use dioxus::prelude::*;

use api::money::Currency;
use api::money::Money;

use crate::components::info_card::InfoCard;
use crate::components::payment_row::PaymentRowCard;
use crate::components::pico::Grid;

/// The two summary cards at the top of the screen. They render in every
/// fetch state; before data arrives they show the initial values.
#[component]
fn SummaryCards(total_users: u32, account_amount: Money) -> Element {
    let account = account_amount.to_string();

    rsx! {
        Grid {
            InfoCard {
                title: "Korisnici",
                value: "{total_users}",
                icon: "👥",
            }
            InfoCard {
                title: "Račun",
                value: "{account}",
                icon: "💳",
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DashboardScreen() -> Element {
    // One fetch per mount. The resource is dropped with the screen, so a
    // response that arrives after unmount never touches live state.
    let dashboard = use_resource(move || async move { api::dashboard().await });

    rsx! {
        match &*dashboard.read() {
            // The fetch has not resolved yet.
            None => rsx! {
                SummaryCards {
                    total_users: 0,
                    account_amount: Money::zero(Currency::BAM),
                }
                progress {}
            },
            // Terminal for this attempt; navigating back re-mounts and refetches.
            Some(Err(e)) => rsx! {
                SummaryCards {
                    total_users: 0,
                    account_amount: Money::zero(Currency::BAM),
                }
                p {
                    class: "error-line",
                    "Greška: {e}"
                }
            },
            Some(Ok(summary)) => rsx! {
                SummaryCards {
                    total_users: summary.total_users,
                    account_amount: summary.account_amount,
                }
                h3 {
                    class: "section-title",
                    "Poslednje uplate"
                }
                div {
                    class: "payment-list",
                    for row in summary.latest.clone() {
                        PaymentRowCard {
                            row,
                        }
                    }
                }
            },
        }
    }
}
