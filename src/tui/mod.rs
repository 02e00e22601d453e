//! Terminal user interface for the dashboard.
//!
//! An interactive grid of chart boxes, one per indicator, grouped into
//! thematic rows. The display mode and country selection are the only
//! interactions; each one rebuilds the whole grid from the immutable
//! dataset.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppEvent, AppState, Mode};
