//! The dashboard controller.
//!
//! Owns every piece of mutable presentation state: the wall-clock shown
//! in the header, the viewport dimensions, the drill-down modal and the
//! chart lifecycle. The controller is synchronous and instant-driven;
//! the surrounding event loop feeds it input events, resize events and
//! [`DashboardController::advance`] calls, and sleeps until
//! [`DashboardController::next_wakeup`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::debug;

use dash_core::data::ReferenceData;
use dash_core::detail::{ChartDetail, KpiDetail};
use dash_core::model::{DepartmentPerformance, OperationalAlert, PaymentMode};

use crate::lifecycle::ChartLifecycle;
use crate::surface::{ChartRenderer, SurfaceProvider};
use crate::timer::{ClockTimer, DeferredAction};

/// Payload of an open drill-down modal.
#[derive(Clone, Debug)]
pub enum ModalContent {
    /// KPI tile decomposition with insights.
    Kpi(KpiDetail),
    /// Chart narrative insights.
    Chart(ChartDetail),
    /// One payment channel with its intraday detail.
    Payment(PaymentMode),
    /// One clinical department.
    Department(DepartmentPerformance),
    /// One operational alert with its recommended actions.
    Alert(OperationalAlert),
}

impl ModalContent {
    /// Discriminant of this payload.
    pub fn kind(&self) -> ModalKind {
        match self {
            ModalContent::Kpi(_) => ModalKind::Kpi,
            ModalContent::Chart(_) => ModalKind::Chart,
            ModalContent::Payment(_) => ModalKind::Payment,
            ModalContent::Department(_) => ModalKind::Department,
            ModalContent::Alert(_) => ModalKind::Alert,
        }
    }

    /// Heading shown at the top of the modal.
    pub fn title(&self) -> &str {
        match self {
            ModalContent::Kpi(detail) => &detail.title,
            ModalContent::Chart(detail) => &detail.title,
            ModalContent::Payment(mode) => &mode.name,
            ModalContent::Department(dept) => &dept.department,
            ModalContent::Alert(alert) => &alert.category,
        }
    }
}

/// What kind of modal is open, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// No modal is open.
    None,
    /// KPI drill-down.
    Kpi,
    /// Chart drill-down.
    Chart,
    /// Payment channel drill-down.
    Payment,
    /// Department drill-down.
    Department,
    /// Alert drill-down.
    Alert,
}

/// Modal visibility and payload; hidden with no payload by default.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    content: Option<ModalContent>,
}

impl ModalState {
    /// True while a modal is shown.
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Discriminant of the open modal, [`ModalKind::None`] when hidden.
    pub fn kind(&self) -> ModalKind {
        self.content
            .as_ref()
            .map_or(ModalKind::None, ModalContent::kind)
    }

    /// Payload of the open modal.
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    fn open(&mut self, content: ModalContent) {
        self.content = Some(content);
    }

    fn close(&mut self) {
        self.content = None;
    }
}

/// Terminal dimensions in cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

/// The controller's three delays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Cadence of the header clock.
    pub clock_period: Duration,
    /// Delay between view attach and chart creation, letting the first
    /// layout pass settle.
    pub view_settle_delay: Duration,
    /// Quiet window a resize burst must close before charts rebuild.
    pub resize_debounce: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            clock_period: Duration::from_secs(1),
            view_settle_delay: Duration::from_millis(100),
            resize_debounce: Duration::from_millis(100),
        }
    }
}

/// Owns all mutable dashboard state and the chart lifecycle.
pub struct DashboardController<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<Context = P::Context>,
{
    data: Arc<ReferenceData>,
    lifecycle: ChartLifecycle<P, R>,
    modal: ModalState,
    viewport: Viewport,
    current_time: DateTime<Local>,
    clock: ClockTimer,
    settle: DeferredAction,
    rebuild: DeferredAction,
    timings: Timings,
    torn_down: bool,
}

impl<P, R> DashboardController<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<Context = P::Context>,
{
    /// Builds the controller and starts the header clock.
    ///
    /// `now` anchors the clock cadence; `wall` is the initially displayed
    /// time, sampled by the driver at the same moment.
    pub fn new(
        data: Arc<ReferenceData>,
        provider: P,
        renderer: R,
        timings: Timings,
        now: Instant,
        wall: DateTime<Local>,
    ) -> Self {
        let mut clock = ClockTimer::new();
        clock.start(now, timings.clock_period);
        Self {
            data,
            lifecycle: ChartLifecycle::new(provider, renderer),
            modal: ModalState::default(),
            viewport: Viewport::default(),
            current_time: wall,
            clock,
            settle: DeferredAction::new(),
            rebuild: DeferredAction::new(),
            timings,
            torn_down: false,
        }
    }

    /// Notes that the view has completed its first render pass.
    ///
    /// Chart creation is deferred by the settle delay so the surfaces
    /// have taken their final geometry before anything binds to them.
    pub fn view_attached(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.settle.schedule(now + self.timings.view_settle_delay);
    }

    /// Records the new viewport and debounces a chart rebuild.
    ///
    /// Scheduling replaces any pending rebuild deadline, so a burst of
    /// resize events collapses into a single destroy/create cycle once
    /// the burst goes quiet. After teardown this is a no-op.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        if self.torn_down {
            return;
        }
        self.viewport = Viewport { width, height };
        self.rebuild.schedule(now + self.timings.resize_debounce);
    }

    /// Fires every due timer.
    ///
    /// `now` orders the engine's deadlines; `wall` is the time to display
    /// if the clock fires, sampled by the driver at the same moment.
    pub fn advance(&mut self, now: Instant, wall: DateTime<Local>) {
        if self.settle.poll(now) {
            debug!("view settled, creating charts");
            self.lifecycle.attach_view();
            self.lifecycle.create_charts(&self.data);
        }
        if self.rebuild.poll(now) {
            debug!(
                width = self.viewport.width,
                height = self.viewport.height,
                "rebuilding charts after resize"
            );
            self.lifecycle.rebuild(&self.data);
        }
        if self.clock.poll(now) {
            self.current_time = wall;
        }
    }

    /// Earliest pending deadline, for the event loop's sleep.
    pub fn next_wakeup(&self) -> Option<Instant> {
        [
            self.clock.next_due(),
            self.settle.next_due(),
            self.rebuild.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Opens the drill-down behind a KPI tile.
    ///
    /// Unknown keys open the generic fallback payload. Opening while a
    /// modal is already shown replaces its content.
    pub fn open_kpi_modal(&mut self, key: &str) {
        let detail = self.data.kpi_detail_for(key);
        self.modal.open(ModalContent::Kpi(detail));
    }

    /// Opens the drill-down behind a chart surface.
    pub fn open_chart_modal(&mut self, key: &str) {
        let detail = self.data.chart_detail_for(key);
        self.modal.open(ModalContent::Chart(detail));
    }

    /// Opens the drill-down for one payment channel.
    pub fn open_payment_modal(&mut self, mode: PaymentMode) {
        self.modal.open(ModalContent::Payment(mode));
    }

    /// Opens the drill-down for one department.
    pub fn open_department_modal(&mut self, department: DepartmentPerformance) {
        self.modal.open(ModalContent::Department(department));
    }

    /// Opens the drill-down for one alert.
    pub fn open_alert_modal(&mut self, alert: OperationalAlert) {
        self.modal.open(ModalContent::Alert(alert));
    }

    /// Hides the modal and drops its payload.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// The reference snapshot every view reads.
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Current modal state.
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Last recorded viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The displayed wall-clock time.
    pub fn current_time(&self) -> DateTime<Local> {
        self.current_time
    }

    /// Number of charts currently live.
    pub fn live_chart_count(&self) -> usize {
        self.lifecycle.live_count()
    }

    /// Stops the clock, cancels pending work and destroys every chart.
    ///
    /// Runs at most once; later calls and the `Drop` backstop are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.clock.stop();
        self.settle.cancel();
        self.rebuild.cancel();
        self.lifecycle.destroy_charts();
        debug!("dashboard torn down");
    }
}

impl<P, R> Drop for DashboardController<P, R>
where
    P: SurfaceProvider,
    R: ChartRenderer<Context = P::Context>,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartConfig;
    use crate::surface::{ChartHandle, ChartSlot, SurfaceError};
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        mounts: usize,
        drops: usize,
    }

    struct CountingProvider;

    impl SurfaceProvider for CountingProvider {
        type Context = ();

        fn context(&mut self, _slot: ChartSlot) -> Result<(), SurfaceError> {
            Ok(())
        }
    }

    struct CountingRenderer {
        counters: Rc<RefCell<Counters>>,
    }

    struct CountingHandle {
        counters: Rc<RefCell<Counters>>,
        disposed: bool,
    }

    impl ChartHandle for CountingHandle {
        fn dispose(&mut self) {
            if !self.disposed {
                self.disposed = true;
                self.counters.borrow_mut().drops += 1;
            }
        }
    }

    impl ChartRenderer for CountingRenderer {
        type Context = ();
        type Handle = CountingHandle;

        fn mount(&mut self, _context: (), _config: ChartConfig) -> CountingHandle {
            self.counters.borrow_mut().mounts += 1;
            CountingHandle {
                counters: self.counters.clone(),
                disposed: false,
            }
        }
    }

    type TestController = DashboardController<CountingProvider, CountingRenderer>;

    fn fixture(now: Instant) -> (TestController, Rc<RefCell<Counters>>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let controller = DashboardController::new(
            Arc::new(ReferenceData::builtin()),
            CountingProvider,
            CountingRenderer {
                counters: counters.clone(),
            },
            Timings::default(),
            now,
            Local::now(),
        );
        (controller, counters)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_clock_starts_at_construction() {
        let t0 = Instant::now();
        let (controller, _) = fixture(t0);
        assert_eq!(controller.next_wakeup(), Some(t0 + ms(1000)));
    }

    #[test]
    fn test_charts_come_up_after_settle_delay() {
        let t0 = Instant::now();
        let (mut controller, counters) = fixture(t0);

        controller.view_attached(t0);
        controller.advance(t0 + ms(50), Local::now());
        assert_eq!(controller.live_chart_count(), 0);

        controller.advance(t0 + ms(100), Local::now());
        assert_eq!(controller.live_chart_count(), 3);
        assert_eq!(counters.borrow().mounts, 3);
    }

    #[test]
    fn test_settle_deadline_drives_next_wakeup() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);

        controller.view_attached(t0);
        // The settle deadline is nearer than the clock tick
        assert_eq!(controller.next_wakeup(), Some(t0 + ms(100)));
    }

    #[test]
    fn test_resize_burst_collapses_into_one_rebuild() {
        let t0 = Instant::now();
        let (mut controller, counters) = fixture(t0);
        controller.view_attached(t0);
        controller.advance(t0 + ms(100), Local::now());
        assert_eq!(counters.borrow().mounts, 3);

        let t1 = t0 + ms(200);
        controller.on_resize(120, 40, t1);
        controller.on_resize(110, 38, t1 + ms(50));

        // First deadline was replaced, nothing fires at it
        controller.advance(t1 + ms(100), Local::now());
        assert_eq!(counters.borrow().drops, 0);

        controller.advance(t1 + ms(150), Local::now());
        assert_eq!(counters.borrow().drops, 3);
        assert_eq!(counters.borrow().mounts, 6);
        assert_eq!(controller.live_chart_count(), 3);
        assert_eq!(controller.viewport(), Viewport { width: 110, height: 38 });
    }

    #[test]
    fn test_clock_tick_overwrites_current_time() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);
        let shown = controller.current_time();

        // Before the period elapses the displayed time is untouched
        let early = Local::now();
        controller.advance(t0 + ms(999), early);
        assert_eq!(controller.current_time(), shown);

        let wall = Local::now() + chrono::Duration::seconds(1);
        controller.advance(t0 + ms(1000), wall);
        assert_eq!(controller.current_time(), wall);
    }

    #[test]
    fn test_kpi_modal_resolves_payload() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);

        controller.open_kpi_modal(dash_core::detail::KPI_TOTAL_REVENUE);
        assert!(controller.modal().is_open());
        assert_eq!(controller.modal().kind(), ModalKind::Kpi);
        match controller.modal().content() {
            Some(ModalContent::Kpi(detail)) => {
                assert_eq!(detail.value, 45_675_000);
                let total: f64 = detail.breakdown.iter().map(|r| r.percentage).sum();
                assert_relative_eq!(total, 100.0, epsilon = 0.1);
            }
            other => panic!("expected KPI payload, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kpi_key_opens_fallback() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);

        controller.open_kpi_modal("noSuchMetric");
        match controller.modal().content() {
            Some(ModalContent::Kpi(detail)) => {
                assert_eq!(detail.title, "KPI Details");
                assert!(detail.breakdown.is_empty());
            }
            other => panic!("expected KPI payload, got {other:?}"),
        }
    }

    #[test]
    fn test_modal_open_replaces_and_close_clears() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);
        let data = ReferenceData::builtin();

        controller.open_payment_modal(data.payment_modes[0].clone());
        assert_eq!(controller.modal().kind(), ModalKind::Payment);
        assert_eq!(controller.modal().content().map(|c| c.title()), Some("Cash"));

        // No stacking: a second open swaps the payload
        controller.open_alert_modal(data.alerts[0].clone());
        assert_eq!(controller.modal().kind(), ModalKind::Alert);

        controller.close_modal();
        assert!(!controller.modal().is_open());
        assert_eq!(controller.modal().kind(), ModalKind::None);
        assert!(controller.modal().content().is_none());
    }

    #[test]
    fn test_teardown_stops_everything_and_runs_once() {
        let t0 = Instant::now();
        let (mut controller, counters) = fixture(t0);
        controller.view_attached(t0);
        controller.advance(t0 + ms(100), Local::now());
        assert_eq!(controller.live_chart_count(), 3);

        controller.teardown();
        assert_eq!(controller.live_chart_count(), 0);
        assert_eq!(counters.borrow().drops, 3);
        assert_eq!(controller.next_wakeup(), None);

        controller.teardown();
        assert_eq!(counters.borrow().drops, 3);
    }

    #[test]
    fn test_resize_after_teardown_is_a_noop() {
        let t0 = Instant::now();
        let (mut controller, _) = fixture(t0);
        let before = controller.viewport();

        controller.teardown();
        controller.on_resize(200, 60, t0 + ms(10));
        assert_eq!(controller.viewport(), before);
        assert_eq!(controller.next_wakeup(), None);
    }

    #[test]
    fn test_drop_disposes_live_charts() {
        let t0 = Instant::now();
        let (mut controller, counters) = fixture(t0);
        controller.view_attached(t0);
        controller.advance(t0 + ms(100), Local::now());

        drop(controller);
        assert_eq!(counters.borrow().drops, 3);
    }
}
