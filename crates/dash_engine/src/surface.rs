//! Contracts between the engine and a concrete chart renderer.
//!
//! The engine never draws. It asks a [`SurfaceProvider`] for the drawing
//! context of a [`ChartSlot`], hands that context plus a configuration to
//! a [`ChartRenderer`], and holds the returned [`ChartHandle`] until the
//! chart is destroyed. Surface acquisition is the only fallible step, and
//! its failures are soft: the lifecycle logs and skips the slot.

use thiserror::Error;

/// The three chart surfaces of the dashboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    /// Monthly revenue/expense trend line chart.
    Revenue,
    /// Per-branch revenue bar chart.
    Location,
    /// Payment channel doughnut.
    Payment,
}

impl ChartSlot {
    /// All slots, in creation order.
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Revenue, ChartSlot::Location, ChartSlot::Payment];

    /// Stable lowercase name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ChartSlot::Revenue => "revenue",
            ChartSlot::Location => "location",
            ChartSlot::Payment => "payment",
        }
    }
}

/// Why a drawing surface could not be acquired.
///
/// Neither variant is fatal: the affected slot is skipped and retried on
/// the next rebuild.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The slot has no drawing surface, e.g. the layout has no room for it.
    #[error("no drawing surface for {0} chart")]
    MissingSurface(&'static str),
    /// The surface exists but its drawing context could not be obtained.
    #[error("drawing context unavailable for {0} chart")]
    ContextUnavailable(&'static str),
}

impl SurfaceError {
    /// Missing-surface error for a slot.
    pub fn missing(slot: ChartSlot) -> Self {
        SurfaceError::MissingSurface(slot.name())
    }

    /// Unavailable-context error for a slot.
    pub fn unavailable(slot: ChartSlot) -> Self {
        SurfaceError::ContextUnavailable(slot.name())
    }
}

/// Supplies drawing contexts for chart slots.
pub trait SurfaceProvider {
    /// Renderer-specific drawing context.
    type Context;

    /// Acquires the drawing context for `slot`.
    fn context(&mut self, slot: ChartSlot) -> Result<Self::Context, SurfaceError>;
}

/// A live chart bound to one drawing surface.
///
/// Disposal releases whatever the renderer allocated; disposing twice is
/// harmless.
pub trait ChartHandle {
    /// Releases the chart's resources.
    fn dispose(&mut self);
}

/// Mounts chart configurations onto drawing contexts.
pub trait ChartRenderer {
    /// Renderer-specific drawing context, matching its provider.
    type Context;
    /// Handle to a mounted chart.
    type Handle: ChartHandle;

    /// Mounts `config` on `context` and returns the live handle.
    fn mount(&mut self, context: Self::Context, config: crate::chart::ChartConfig)
        -> Self::Handle;
}
