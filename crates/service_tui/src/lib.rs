//! # Acuity TUI
//!
//! Terminal dashboard for the Acuity eye-care network's financial
//! operations. Renders the dashboard engine's state with ratatui and
//! crossterm.
//!
//! ## Layout
//! - **Header**: product title and live wall clock
//! - **KPI strip**: revenue, expenses, net income and bank balance tiles
//! - **Charts**: revenue trend line, location bars, payment mix gauges
//! - **Panes**: department performance table and operational alerts
//! - **Modals**: drill-downs behind every tile, chart and list row
//!
//! ## Wiring
//! The engine draws nothing itself. [`render`] implements its surface
//! contracts over a shared chart store, [`app`] drives it from a tokio
//! event loop, and [`screens`] turns published chart configurations
//! into widgets.

pub mod app;
pub mod config;
pub mod render;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{FocusPane, RenderState, TuiApp};
    pub use crate::config::TuiConfig;
    pub use crate::render::{ChartStore, TerminalViewport, TuiChartRenderer, TuiSurfaces};
}
