//=============================================================================
// File: src/screens/user_detail.rs
//=============================================================================
use dioxus::prelude::*;

use api::dashboard::UserId;

use crate::components::action_link::ActionLink;
use crate::components::pico::Card;
use crate::Screen;

/// Destination for a payment row click, keyed by the row's user id.
#[allow(non_snake_case)]
#[component]
pub fn UserDetailScreen(user_id: UserId) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        Card {
            h3 { "Korisnik" }
            p { "Evidencioni broj: {user_id}" }
            ActionLink {
                state: active_screen,
                to: Screen::Dashboard,
                "Nazad na početnu"
            }
        }
    }
}
