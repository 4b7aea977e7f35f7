//! Shared components for the app: layout primitives plus the cards and
//! badges the dashboard is built from.
pub mod action_link;
pub mod badge;
pub mod info_card;
pub mod payment_row;
pub mod pico;
