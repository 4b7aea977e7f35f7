use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// The navigation signal provided at the app root.
    pub state: Signal<Screen>,
    /// Destination to activate on click.
    pub to: Screen,
    pub children: Element,
}

/// An anchor that swaps the active screen instead of following its href.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                // Keep the browser from treating this as a real link.
                evt.prevent_default();

                let mut state = props.state;
                state.set(props.to.clone());
            },
            {props.children}
        }
    }
}
