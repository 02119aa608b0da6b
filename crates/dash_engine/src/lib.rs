//! # dash_engine: Dashboard State & Presentation Engine
//!
//! dash_engine turns the static reference snapshot from `dash_core` into
//! presentation state: declarative chart configurations, the per-surface
//! chart lifecycle, modal drill-down selection and the dashboard
//! controller that ties them together.
//!
//! ## Features
//!
//! - **Chart configuration builders**: pure functions from domain rows to
//!   renderer-agnostic, Chart.js-compatible configurations (`chart`)
//! - **Renderer contracts**: the seams a concrete view layer implements
//!   (`surface`)
//! - **Deterministic timers**: poll-driven clock and cancellable deferred
//!   actions, no runtime required (`timer`)
//! - **Chart lifecycle**: at most one live chart per surface, destroys
//!   before creates, soft-skip on surface failures (`lifecycle`)
//! - **Dashboard controller**: wall clock, viewport, debounced rebuild,
//!   modal open/close, idempotent teardown (`controller`)
//!
//! ## Architecture Compliance
//!
//! The engine is single-threaded and synchronous. Time enters only
//! through [`controller::DashboardController::advance`]; rendering
//! happens only behind the `surface` contracts. Every operation is total:
//! failures degrade to a logged skip or a generic payload, never a panic.

pub mod chart;
pub mod controller;
pub mod lifecycle;
pub mod surface;
pub mod timer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chart::{
        location_bar_config, payment_doughnut_config, revenue_trend_config, ChartConfig,
        ChartKind, LabelFormatter, TooltipContext,
    };
    pub use crate::controller::{DashboardController, ModalContent, ModalKind, Timings, Viewport};
    pub use crate::lifecycle::ChartLifecycle;
    pub use crate::surface::{ChartHandle, ChartRenderer, ChartSlot, SurfaceError, SurfaceProvider};
    pub use crate::timer::{ClockTimer, DeferredAction};
}
