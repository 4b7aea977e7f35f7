// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use api::dashboard::UserId;
use components::action_link::ActionLink;
use screens::dashboard::DashboardScreen;
use screens::user_detail::UserDetailScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    #[default]
    Dashboard,
    UserDetail(UserId),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Početna",
            Screen::UserDetail(_) => "Korisnik",
        }
    }
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Frame styling only; card, badge and list rules live in the stylesheet.
    let frame_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--app-backdrop-color);
    }

    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        justify-content: center;
        align-items: stretch;
        overflow: hidden;
    }

    .app-shell {
        width: 100%;
        max-width: 480px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--app-background-color);
    }

    .app-shell > header {
        flex-shrink: 0;
        padding: 0.75rem 1rem;
        border-bottom: 1px solid var(--app-border-color);
    }

    .app-shell > header nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .app-shell > header h1 {
        margin: 0;
        font-size: 1.35rem;
    }

    .app-shell .content {
        flex: 1;
        overflow-y: auto;
        min-height: 0;
        padding: 1.25rem 1rem 5rem 1rem;
    }
    "#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }
        style {
            "{frame_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let active_screen = use_signal(Screen::default);

    // Row cards and deep links navigate by writing this signal.
    use_context_provider(|| active_screen);

    let title = active_screen.read().name();

    rsx! {
        div {
            class: "app-main-container",
            div {
                class: "app-shell",
                header {
                    nav {
                        h1 { "{title}" }
                        if active_screen() != Screen::Dashboard {
                            ActionLink {
                                state: active_screen,
                                to: Screen::Dashboard,
                                "Početna"
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::UserDetail(user_id) => rsx! {
                            UserDetailScreen {
                                user_id,
                            }
                        },
                    }
                }
            }
        }
    }
}
