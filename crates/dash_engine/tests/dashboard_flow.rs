//! End-to-end engine flow against recording collaborators.
//!
//! Drives the public controller API the way the terminal event loop
//! does: attach, settle, resize bursts, modal drill-downs and teardown,
//! with a provider/renderer pair that records every surface acquisition,
//! mount and disposal.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::Local;

use dash_core::data::ReferenceData;
use dash_core::detail::{CHART_LOCATION, KPI_NET_INCOME};
use dash_engine::chart::ChartConfig;
use dash_engine::controller::{DashboardController, ModalContent, ModalKind, Timings};
use dash_engine::surface::{ChartHandle, ChartRenderer, ChartSlot, SurfaceError, SurfaceProvider};

type EventLog = Arc<Mutex<Vec<String>>>;

struct RecordingProvider {
    events: EventLog,
    missing: Option<ChartSlot>,
}

impl SurfaceProvider for RecordingProvider {
    type Context = ChartSlot;

    fn context(&mut self, slot: ChartSlot) -> Result<ChartSlot, SurfaceError> {
        if self.missing == Some(slot) {
            return Err(SurfaceError::missing(slot));
        }
        self.events
            .lock()
            .unwrap()
            .push(format!("context:{}", slot.name()));
        Ok(slot)
    }
}

struct RecordingRenderer {
    events: EventLog,
}

struct RecordingHandle {
    slot: ChartSlot,
    events: EventLog,
    disposed: bool,
}

impl ChartHandle for RecordingHandle {
    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.events
                .lock()
                .unwrap()
                .push(format!("dispose:{}", self.slot.name()));
        }
    }
}

impl ChartRenderer for RecordingRenderer {
    type Context = ChartSlot;
    type Handle = RecordingHandle;

    fn mount(&mut self, context: ChartSlot, config: ChartConfig) -> RecordingHandle {
        self.events
            .lock()
            .unwrap()
            .push(format!("mount:{}:{:?}", context.name(), config.kind));
        RecordingHandle {
            slot: context,
            events: self.events.clone(),
            disposed: false,
        }
    }
}

type TestController = DashboardController<RecordingProvider, RecordingRenderer>;

fn controller_with(missing: Option<ChartSlot>, now: Instant) -> (TestController, EventLog) {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let controller = DashboardController::new(
        Arc::new(ReferenceData::builtin()),
        RecordingProvider {
            events: events.clone(),
            missing,
        },
        RecordingRenderer {
            events: events.clone(),
        },
        Timings::default(),
        now,
        Local::now(),
    );
    (controller, events)
}

fn count_with_prefix(events: &EventLog, prefix: &str) -> usize {
    events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.starts_with(prefix))
        .count()
}

#[test]
fn test_full_startup_resize_teardown_flow() {
    let t0 = Instant::now();
    let (mut controller, events) = controller_with(None, t0);

    // First render pass happened; charts wait for the settle delay
    controller.view_attached(t0);
    assert_eq!(controller.live_chart_count(), 0);
    controller.advance(t0 + Duration::from_millis(100), Local::now());
    assert_eq!(controller.live_chart_count(), 3);
    assert_eq!(count_with_prefix(&events, "mount:"), 3);

    // A resize burst settles into exactly one destroy/create cycle
    let t1 = t0 + Duration::from_millis(500);
    controller.on_resize(140, 45, t1);
    controller.on_resize(132, 44, t1 + Duration::from_millis(30));
    controller.on_resize(130, 43, t1 + Duration::from_millis(60));
    controller.advance(t1 + Duration::from_millis(160), Local::now());

    assert_eq!(count_with_prefix(&events, "dispose:"), 3);
    assert_eq!(count_with_prefix(&events, "mount:"), 6);
    assert_eq!(controller.live_chart_count(), 3);

    // Every dispose of the cycle precedes every mount of the cycle
    let log = events.lock().unwrap().clone();
    let cycle = &log[6..];
    let last_dispose = cycle
        .iter()
        .rposition(|e| e.starts_with("dispose:"))
        .unwrap();
    let first_mount = cycle.iter().position(|e| e.starts_with("mount:")).unwrap();
    assert!(last_dispose < first_mount);

    controller.teardown();
    assert_eq!(controller.live_chart_count(), 0);
    assert_eq!(count_with_prefix(&events, "dispose:"), 6);

    // Resize after teardown stays inert
    controller.on_resize(80, 24, t1 + Duration::from_secs(2));
    assert_eq!(controller.next_wakeup(), None);
}

#[test]
fn test_missing_surface_degrades_to_partial_dashboard() {
    let t0 = Instant::now();
    let (mut controller, events) = controller_with(Some(ChartSlot::Location), t0);

    controller.view_attached(t0);
    controller.advance(t0 + Duration::from_millis(100), Local::now());

    assert_eq!(controller.live_chart_count(), 2);
    assert_eq!(count_with_prefix(&events, "mount:"), 2);
    assert_eq!(count_with_prefix(&events, "mount:location"), 0);
}

#[test]
fn test_every_modal_kind_opens_and_replaces() {
    let t0 = Instant::now();
    let (mut controller, _events) = controller_with(None, t0);
    let data = ReferenceData::builtin();

    controller.open_kpi_modal(KPI_NET_INCOME);
    assert_eq!(controller.modal().kind(), ModalKind::Kpi);

    controller.open_chart_modal(CHART_LOCATION);
    assert_eq!(controller.modal().kind(), ModalKind::Chart);
    match controller.modal().content() {
        Some(ModalContent::Chart(detail)) => {
            assert_eq!(detail.title, "Location Performance Details");
        }
        other => panic!("expected chart payload, got {other:?}"),
    }

    controller.open_payment_modal(data.payment_modes[1].clone());
    assert_eq!(controller.modal().content().map(|c| c.title()), Some("Digital"));

    controller.open_department_modal(data.departments[0].clone());
    assert_eq!(controller.modal().content().map(|c| c.title()), Some("Cataract"));

    controller.open_alert_modal(data.alerts[0].clone());
    assert_eq!(
        controller.modal().content().map(|c| c.title()),
        Some("Revenue Mismatch")
    );

    controller.close_modal();
    assert_eq!(controller.modal().kind(), ModalKind::None);
}

#[test]
fn test_wakeup_driven_pump_keeps_clock_current() {
    let t0 = Instant::now();
    let (mut controller, _events) = controller_with(None, t0);

    // Drive the controller the way the event loop does: sleep until the
    // next deadline, then advance with that instant
    let mut ticks = 0;
    let mut wall = Local::now();
    for _ in 0..3 {
        let due = controller.next_wakeup().expect("clock keeps a deadline");
        wall += chrono::Duration::seconds(1);
        controller.advance(due, wall);
        ticks += 1;
        assert_eq!(controller.current_time(), wall);
    }
    assert_eq!(ticks, 3);
    assert_eq!(
        controller.next_wakeup(),
        Some(t0 + Duration::from_secs(3) + Duration::from_secs(1))
    );
}
