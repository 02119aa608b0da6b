//! Chart lifecycle management.
//!
//! Each of the three chart surfaces moves through a small state machine:
//! `Unmounted` until the view has settled, `Empty` once a surface exists,
//! `Live` while exactly one chart is bound to it. The manager guarantees
//! at most one live chart per slot, destroys every live chart before any
//! replacement is created, and degrades a failed surface to a logged skip
//! so the remaining charts still come up.

use tracing::{debug, warn};

use dash_core::data::ReferenceData;

use crate::chart::{
    location_bar_config, payment_doughnut_config, revenue_trend_config, ChartConfig,
};
use crate::surface::{ChartHandle, ChartRenderer, ChartSlot, SurfaceProvider};

/// Builds the configuration a slot plots.
fn config_for(slot: ChartSlot, data: &ReferenceData) -> ChartConfig {
    match slot {
        ChartSlot::Revenue => revenue_trend_config(&data.revenue_trend),
        ChartSlot::Location => location_bar_config(&data.locations),
        ChartSlot::Payment => payment_doughnut_config(&data.payment_modes),
    }
}

enum SlotState<H> {
    /// No drawing surface exists yet.
    Unmounted,
    /// Surface available, no chart bound.
    Empty,
    /// Exactly one chart bound to the surface.
    Live(H),
}

/// Owns the provider, the renderer and the per-slot chart state.
pub struct ChartLifecycle<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<Context = P::Context>,
{
    provider: P,
    renderer: R,
    slots: [SlotState<R::Handle>; 3],
}

impl<P, R> ChartLifecycle<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<Context = P::Context>,
{
    /// A manager with every slot unmounted.
    pub fn new(provider: P, renderer: R) -> Self {
        Self {
            provider,
            renderer,
            slots: [
                SlotState::Unmounted,
                SlotState::Unmounted,
                SlotState::Unmounted,
            ],
        }
    }

    fn index(slot: ChartSlot) -> usize {
        match slot {
            ChartSlot::Revenue => 0,
            ChartSlot::Location => 1,
            ChartSlot::Payment => 2,
        }
    }

    /// Marks every unmounted slot as having a surface.
    ///
    /// Invoked once the view has settled after its first render pass.
    /// Slots that are already empty or live are untouched.
    pub fn attach_view(&mut self) {
        for state in &mut self.slots {
            if matches!(state, SlotState::Unmounted) {
                *state = SlotState::Empty;
            }
        }
    }

    /// Creates a chart on every empty slot.
    ///
    /// Unmounted and already-live slots are skipped, as is any slot whose
    /// surface cannot be acquired; a failure on one slot never blocks the
    /// others.
    pub fn create_charts(&mut self, data: &ReferenceData) {
        for slot in ChartSlot::ALL {
            self.create_chart(slot, data);
        }
    }

    fn create_chart(&mut self, slot: ChartSlot, data: &ReferenceData) {
        match self.slots[Self::index(slot)] {
            SlotState::Unmounted => {
                debug!(slot = slot.name(), "view not attached, skipping create");
                return;
            }
            SlotState::Live(_) => {
                debug!(slot = slot.name(), "chart already live, skipping create");
                return;
            }
            SlotState::Empty => {}
        }
        let context = match self.provider.context(slot) {
            Ok(context) => context,
            Err(err) => {
                warn!(slot = slot.name(), %err, "surface unavailable, skipping chart");
                return;
            }
        };
        let handle = self.renderer.mount(context, config_for(slot, data));
        self.slots[Self::index(slot)] = SlotState::Live(handle);
        debug!(slot = slot.name(), "chart created");
    }

    /// Disposes every live chart, leaving its slot empty.
    ///
    /// Idempotent: empty and unmounted slots are untouched.
    pub fn destroy_charts(&mut self) {
        for (i, slot) in ChartSlot::ALL.into_iter().enumerate() {
            if let SlotState::Live(handle) = &mut self.slots[i] {
                handle.dispose();
                self.slots[i] = SlotState::Empty;
                debug!(slot = slot.name(), "chart destroyed");
            }
        }
    }

    /// Destroys every live chart, then creates the set afresh.
    ///
    /// All destroys complete before the first create, so no surface is
    /// ever bound to two charts.
    pub fn rebuild(&mut self, data: &ReferenceData) {
        self.destroy_charts();
        self.create_charts(data);
    }

    /// Number of slots currently holding a live chart.
    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, SlotState::Live(_)))
            .count()
    }

    /// True if `slot` currently holds a live chart.
    pub fn is_live(&self, slot: ChartSlot) -> bool {
        matches!(self.slots[Self::index(slot)], SlotState::Live(_))
    }
}
