//! Chart surfaces and renderer for the terminal view.
//!
//! Implements the engine's surface contracts over a shared chart store:
//! mounting a chart publishes its configuration, disposing it withdraws
//! the configuration, and the draw pass reads whatever is currently
//! published. A slot's surface exists only while the terminal is large
//! enough to give the chart panes drawable rows; below the minimum the
//! engine sees a missing surface and skips the slot until the next
//! rebuild.

use std::sync::{Arc, Mutex};

use tracing::debug;

use dash_engine::chart::ChartConfig;
use dash_engine::surface::{ChartHandle, ChartRenderer, ChartSlot, SurfaceError, SurfaceProvider};

/// Narrowest terminal that still has chart surfaces.
pub const MIN_CHART_COLS: u16 = 40;
/// Shortest terminal that still has chart surfaces.
pub const MIN_CHART_ROWS: u16 = 12;

/// Store index of a slot, following [`ChartSlot::ALL`] order.
fn slot_index(slot: ChartSlot) -> usize {
    match slot {
        ChartSlot::Revenue => 0,
        ChartSlot::Location => 1,
        ChartSlot::Payment => 2,
    }
}

/// Published chart configurations, one cell per slot.
///
/// Clones share the same cells. The engine writes through
/// [`TuiChartRenderer`] and [`TuiChartHandle`]; the draw pass reads
/// through [`ChartStore::get`] or [`ChartStore::snapshot`].
#[derive(Clone, Debug, Default)]
pub struct ChartStore {
    cells: Arc<Mutex<[Option<ChartConfig>; 3]>>,
}

impl ChartStore {
    /// Empty store with no published configurations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration currently published for `slot`, if any.
    pub fn get(&self, slot: ChartSlot) -> Option<ChartConfig> {
        self.cells
            .lock()
            .ok()
            .and_then(|cells| cells[slot_index(slot)].clone())
    }

    /// All three cells in slot order.
    pub fn snapshot(&self) -> [Option<ChartConfig>; 3] {
        self.cells
            .lock()
            .map(|cells| (*cells).clone())
            .unwrap_or_default()
    }

    /// Number of slots with a published configuration.
    pub fn live_count(&self) -> usize {
        self.cells
            .lock()
            .map(|cells| cells.iter().flatten().count())
            .unwrap_or(0)
    }

    fn publish(&self, slot: ChartSlot, config: ChartConfig) {
        if let Ok(mut cells) = self.cells.lock() {
            cells[slot_index(slot)] = Some(config);
        }
    }

    fn withdraw(&self, slot: ChartSlot) {
        if let Ok(mut cells) = self.cells.lock() {
            cells[slot_index(slot)] = None;
        }
    }

    fn is_poisoned(&self) -> bool {
        self.cells.is_poisoned()
    }
}

/// Last observed terminal dimensions, shared between the event loop and
/// the surface provider.
#[derive(Clone, Debug)]
pub struct TerminalViewport {
    dims: Arc<Mutex<(u16, u16)>>,
}

impl TerminalViewport {
    /// Viewport starting at the given dimensions.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            dims: Arc::new(Mutex::new((cols, rows))),
        }
    }

    /// Records a new terminal size.
    pub fn update(&self, cols: u16, rows: u16) {
        if let Ok(mut dims) = self.dims.lock() {
            *dims = (cols, rows);
        }
    }

    /// Current `(columns, rows)`.
    pub fn dims(&self) -> (u16, u16) {
        self.dims.lock().map(|dims| *dims).unwrap_or((0, 0))
    }
}

/// Surface provider backed by the terminal viewport.
pub struct TuiSurfaces {
    charts: ChartStore,
    viewport: TerminalViewport,
}

impl TuiSurfaces {
    /// Provider publishing into `charts` and sized by `viewport`.
    pub fn new(charts: ChartStore, viewport: TerminalViewport) -> Self {
        Self { charts, viewport }
    }
}

impl SurfaceProvider for TuiSurfaces {
    type Context = SlotSurface;

    fn context(&mut self, slot: ChartSlot) -> Result<SlotSurface, SurfaceError> {
        let (cols, rows) = self.viewport.dims();
        if cols < MIN_CHART_COLS || rows < MIN_CHART_ROWS {
            return Err(SurfaceError::missing(slot));
        }
        if self.charts.is_poisoned() {
            return Err(SurfaceError::unavailable(slot));
        }
        Ok(SlotSurface {
            slot,
            charts: self.charts.clone(),
        })
    }
}

/// Drawing context for one slot: write access to its store cell.
#[derive(Debug)]
pub struct SlotSurface {
    slot: ChartSlot,
    charts: ChartStore,
}

/// Renderer that publishes configurations into the chart store.
#[derive(Copy, Clone, Debug, Default)]
pub struct TuiChartRenderer;

impl ChartRenderer for TuiChartRenderer {
    type Context = SlotSurface;
    type Handle = TuiChartHandle;

    fn mount(&mut self, context: SlotSurface, config: ChartConfig) -> TuiChartHandle {
        debug!(slot = context.slot.name(), "publishing chart configuration");
        context.charts.publish(context.slot, config);
        TuiChartHandle {
            slot: context.slot,
            charts: context.charts,
            disposed: false,
        }
    }
}

/// A live chart: withdraws its configuration when disposed or dropped.
pub struct TuiChartHandle {
    slot: ChartSlot,
    charts: ChartStore,
    disposed: bool,
}

impl ChartHandle for TuiChartHandle {
    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.charts.withdraw(self.slot);
        }
    }
}

impl Drop for TuiChartHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
