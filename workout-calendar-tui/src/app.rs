// workout-calendar-tui/src/app.rs
mod actions;
mod data;
mod input;
mod modals;
mod navigation_helpers;
pub mod state;

pub use state::{ActiveModal, ActiveTab, App, FormFocus};
