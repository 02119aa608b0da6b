//! TUI application state and event handling.
//!
//! `TuiApp` owns the terminal, the engine controller and the focus
//! state. Terminal events arrive over a channel fed by a blocking
//! reader thread, so the driver loop can wait on whichever comes
//! first, input or the controller's next timer deadline.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant as TokioInstant};

use dash_core::data::ReferenceData;
use dash_core::detail::{
    CHART_LOCATION, CHART_REVENUE, KPI_BANK_BALANCE, KPI_NET_INCOME, KPI_TOTAL_EXPENSES,
    KPI_TOTAL_REVENUE,
};
use dash_engine::chart::ChartConfig;
use dash_engine::controller::{DashboardController, ModalContent};

use crate::config::TuiConfig;
use crate::render::{ChartStore, TerminalViewport, TuiChartRenderer, TuiSurfaces};
use crate::screens;

type TuiController = DashboardController<TuiSurfaces, TuiChartRenderer>;

/// Pane holding keyboard focus for row selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusPane {
    Payments,
    Departments,
    Alerts,
}

impl FocusPane {
    /// Next pane in Tab order.
    pub fn next(self) -> Self {
        match self {
            FocusPane::Payments => FocusPane::Departments,
            FocusPane::Departments => FocusPane::Alerts,
            FocusPane::Alerts => FocusPane::Payments,
        }
    }
}

/// Snapshot handed to the draw closure for one frame.
pub struct RenderState {
    /// Reference dataset backing every pane.
    pub data: Arc<ReferenceData>,
    /// Published chart configurations in slot order.
    pub charts: [Option<ChartConfig>; 3],
    /// Open drill-down, if any.
    pub modal: Option<ModalContent>,
    /// Header clock as last ticked by the controller.
    pub clock: DateTime<Local>,
    /// Pane holding focus.
    pub focus: FocusPane,
    /// Selected row within the focused pane.
    pub selected: usize,
}

/// Number of selectable rows in a pane.
fn pane_len(data: &ReferenceData, pane: FocusPane) -> usize {
    match pane {
        FocusPane::Payments => data.payment_modes.len(),
        FocusPane::Departments => data.departments.len(),
        FocusPane::Alerts => data.alerts.len(),
    }
}

/// Sleeps until the deadline, or forever when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(instant) => sleep_until(TokioInstant::from_std(instant)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Blocking reader loop feeding terminal events into the channel.
///
/// Runs on its own thread; exits when the receiver side is dropped or
/// the terminal stream fails.
fn forward_terminal_events(tx: mpsc::Sender<Event>) {
    loop {
        match event::read() {
            Ok(event) => {
                if tx.blocking_send(event).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

/// Terminal dashboard application.
pub struct TuiApp {
    data: Arc<ReferenceData>,
    controller: TuiController,
    charts: ChartStore,
    viewport: TerminalViewport,
    focus: FocusPane,
    selected: usize,
    should_quit: bool,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Sets up the terminal and builds the engine controller.
    pub fn new(config: &TuiConfig) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let size = terminal.size()?;
        let data = Arc::new(ReferenceData::builtin());
        let charts = ChartStore::new();
        let viewport = TerminalViewport::new(size.width, size.height);
        let surfaces = TuiSurfaces::new(charts.clone(), viewport.clone());

        let mut controller = TuiController::new(
            Arc::clone(&data),
            surfaces,
            TuiChartRenderer,
            config.timings(),
            Instant::now(),
            Local::now(),
        );
        controller.view_attached(Instant::now());

        Ok(Self {
            data,
            controller,
            charts,
            viewport,
            focus: FocusPane::Payments,
            selected: 0,
            should_quit: false,
            terminal,
        })
    }

    /// Snapshot of everything the next frame needs.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            data: Arc::clone(&self.data),
            charts: self.charts.snapshot(),
            modal: self.controller.modal().content().cloned(),
            clock: self.controller.current_time(),
            focus: self.focus,
            selected: self.selected,
        }
    }

    /// Event loop: draw a frame, then wait for input or the next timer.
    pub async fn run(&mut self) -> Result<()> {
        let (tx, mut rx) = mpsc::channel(32);
        thread::spawn(move || forward_terminal_events(tx));

        while !self.should_quit {
            let state = self.render_state();
            self.terminal.draw(|frame| Self::draw(frame, &state))?;

            tokio::select! {
                maybe_event = rx.recv() => match maybe_event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                _ = wait_until(self.controller.next_wakeup()) => {}
            }
            self.controller.advance(Instant::now(), Local::now());
        }

        self.controller.teardown();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(width, height) => {
                self.viewport.update(width, height);
                self.controller.on_resize(width, height, Instant::now());
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.controller.modal().is_open() {
                    self.controller.close_modal();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('t') => self.controller.open_kpi_modal(KPI_TOTAL_REVENUE),
            KeyCode::Char('e') => self.controller.open_kpi_modal(KPI_TOTAL_EXPENSES),
            KeyCode::Char('n') => self.controller.open_kpi_modal(KPI_NET_INCOME),
            KeyCode::Char('b') => self.controller.open_kpi_modal(KPI_BANK_BALANCE),
            KeyCode::Char('r') => self.controller.open_chart_modal(CHART_REVENUE),
            KeyCode::Char('l') => self.controller.open_chart_modal(CHART_LOCATION),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.selected = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let limit = pane_len(&self.data, self.focus).saturating_sub(1);
                self.selected = (self.selected + 1).min(limit);
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    /// Opens the drill-down for the focused pane's selected row.
    fn open_selected(&mut self) {
        match self.focus {
            FocusPane::Payments => {
                if let Some(mode) = self.data.payment_modes.get(self.selected).cloned() {
                    self.controller.open_payment_modal(mode);
                }
            }
            FocusPane::Departments => {
                if let Some(dept) = self.data.departments.get(self.selected).cloned() {
                    self.controller.open_department_modal(dept);
                }
            }
            FocusPane::Alerts => {
                if let Some(alert) = self.data.alerts.get(self.selected).cloned() {
                    self.controller.open_alert_modal(alert);
                }
            }
        }
    }

    fn draw(frame: &mut Frame, state: &RenderState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(11),
                Constraint::Length(10),
                Constraint::Length(4),
            ])
            .split(frame.size());

        screens::draw_header(frame, rows[0], &state.clock);
        screens::draw_kpi_strip(frame, rows[1], &state.data.kpis);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(32),
                Constraint::Percentage(28),
            ])
            .split(rows[2]);
        // Snapshot indices follow ChartSlot::ALL order
        screens::draw_revenue_pane(frame, charts[0], state.charts[0].as_ref());
        screens::draw_location_pane(frame, charts[1], state.charts[1].as_ref());
        screens::draw_payment_pane(
            frame,
            charts[2],
            state.charts[2].as_ref(),
            state.focus == FocusPane::Payments,
            state.selected,
        );

        let tables = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(rows[3]);
        screens::draw_departments_pane(
            frame,
            tables[0],
            &state.data.departments,
            state.focus == FocusPane::Departments,
            state.selected,
        );
        screens::draw_alerts_pane(
            frame,
            tables[1],
            &state.data.alerts,
            state.focus == FocusPane::Alerts,
            state.selected,
        );

        screens::draw_status_footer(frame, rows[4], &state.data.kpis);

        if let Some(content) = &state.modal {
            screens::draw_modal(frame, content);
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_panes() {
        assert_eq!(FocusPane::Payments.next(), FocusPane::Departments);
        assert_eq!(FocusPane::Departments.next(), FocusPane::Alerts);
        assert_eq!(FocusPane::Alerts.next(), FocusPane::Payments);
    }

    #[test]
    fn test_pane_len_matches_reference_data() {
        let data = ReferenceData::builtin();
        assert_eq!(pane_len(&data, FocusPane::Payments), 3);
        assert_eq!(pane_len(&data, FocusPane::Departments), 6);
        assert_eq!(pane_len(&data, FocusPane::Alerts), 4);
    }

    #[test]
    fn test_wait_until_elapsed_deadline_returns() {
        tokio_test::block_on(wait_until(Some(Instant::now())));
    }
}
