//! Screen rendering functions for the TUI.
//!
//! Every pane draws from either the reference snapshot or a chart
//! configuration published by the engine. A pane whose configuration is
//! not published renders a placeholder instead of failing the frame.

use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset, Gauge,
        GraphType, List, ListItem, ListState, Paragraph, Row, Table, Wrap,
    },
};

use dash_core::detail::{BreakdownRow, ChartDetail, KpiDetail};
use dash_core::format::{
    classify_trend, format_compact_currency, format_precise_amount, group_indian,
    group_thousands, Trend,
};
use dash_core::model::{
    DepartmentPerformance, KpiSnapshot, OperationalAlert, PaymentMode, Severity,
};
use dash_engine::chart::{ChartConfig, Paint, SeriesSpec, TooltipContext};
use dash_engine::controller::ModalContent;

/// Maps a CSS colour, `#rrggbb` or `rgba(r, g, b, a)`, onto a terminal
/// colour. Unparseable input falls back to white rather than failing
/// the draw.
fn tui_color(css: &str) -> Color {
    let css = css.trim();
    if let Some(hex) = css.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let channel = |range| u8::from_str_radix(&hex[range], 16).ok();
            if let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
                return Color::Rgb(r, g, b);
            }
        }
    } else if let Some(body) = css.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        let mut parts = body.split(',').map(str::trim);
        if let (Some(r), Some(g), Some(b)) = (parts.next(), parts.next(), parts.next()) {
            if let (Ok(r), Ok(g), Ok(b)) = (r.parse(), g.parse(), b.parse()) {
                return Color::Rgb(r, g, b);
            }
        }
    }
    Color::White
}

/// Line colour of a series: the border paint, which line charts carry
/// as a solid colour token.
fn series_color(spec: &SeriesSpec) -> Color {
    spec.border_color
        .as_ref()
        .or(spec.background_color.as_ref())
        .map(|paint| paint_color(paint, 0))
        .unwrap_or(Color::White)
}

/// Colour of one data point: the background paint, which bar and
/// doughnut charts carry per point.
fn point_color(spec: &SeriesSpec, index: usize) -> Color {
    spec.background_color
        .as_ref()
        .or(spec.border_color.as_ref())
        .map(|paint| paint_color(paint, index))
        .unwrap_or(Color::White)
}

fn paint_color(paint: &Paint, index: usize) -> Color {
    match paint {
        Paint::Solid(color) => tui_color(color),
        Paint::PerPoint(colors) => colors
            .get(index % colors.len().max(1))
            .map(|color| tui_color(color))
            .unwrap_or(Color::White),
    }
}

/// Axis label for `value`, using the configuration's own tick formatter
/// when it carries one.
fn axis_label(config: &ChartConfig, value: f64) -> String {
    config
        .options
        .scales
        .as_ref()
        .and_then(|scales| scales.y.as_ref())
        .and_then(|axis| axis.ticks.formatter.as_ref())
        .map(|formatter| formatter.format(value))
        .unwrap_or_else(|| format!("{value:.0}"))
}

/// Bar height in tenths, keeping one decimal of resolution.
fn bar_height(value: f64) -> u64 {
    (value * 10.0).round() as u64
}

/// Tooltip lines for one data point, composed by the configuration's
/// own label formatter.
fn tooltip_lines(config: &ChartConfig, label: &str, index: usize, value: f64) -> Vec<String> {
    config
        .options
        .plugins
        .tooltip
        .label_formatter
        .as_ref()
        .map(|formatter| {
            formatter.format(&TooltipContext {
                series_label: String::new(),
                label: label.to_string(),
                data_index: index,
                value,
            })
        })
        .unwrap_or_default()
}

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Positive => Color::Green,
        Trend::Negative => Color::Red,
        Trend::Neutral => Color::DarkGray,
    }
}

/// Arrow, signed percentage and suffix in the trend's colour.
fn trend_span(value: f64, suffix: &str) -> Span<'static> {
    let trend = classify_trend(value);
    Span::styled(
        format!("{} {:+.1}%{}", trend.arrow(), value, suffix),
        Style::default().fg(trend_color(trend)),
    )
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Centred sub-rectangle covering the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn chart_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let placeholder = Paragraph::new("chart unavailable")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

/// Draw the header with the product title and wall clock
pub fn draw_header(frame: &mut Frame, area: Rect, clock: &DateTime<Local>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(area);

    let title = Paragraph::new(" Acuity Eye Care | Financial Operations ")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let time = Paragraph::new(format!(" {} ", clock.format("%a %d %b %Y %H:%M:%S")))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(time, chunks[1]);
}

/// Draw the four KPI tiles
pub fn draw_kpi_strip(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    kpi_tile(
        frame,
        tiles[0],
        " Total Revenue ",
        kpis.total_revenue,
        trend_span(kpis.trends.daily, " vs yesterday"),
    );
    kpi_tile(
        frame,
        tiles[1],
        " Total Expenses ",
        kpis.total_expenses,
        Span::styled(
            format!("{}% reconciled", kpis.reconciliation_percentage),
            Style::default().fg(Color::DarkGray),
        ),
    );
    kpi_tile(
        frame,
        tiles[2],
        " Net Operating Income ",
        kpis.net_operating_income,
        trend_span(kpis.trends.monthly, " vs last month"),
    );
    kpi_tile(
        frame,
        tiles[3],
        " Bank Balance ",
        kpis.bank_balance,
        Span::styled(
            format!(
                "cash on hand {}",
                format_compact_currency(kpis.cash_on_hand as f64)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    );
}

fn kpi_tile(frame: &mut Frame, area: Rect, title: &str, value: u64, detail: Span) {
    let lines = vec![
        Line::from(Span::styled(
            format_compact_currency(value as f64),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(detail),
    ];
    let tile = Paragraph::new(lines)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(tile, area);
}

/// Draw the revenue trend pane as a line chart
pub fn draw_revenue_pane(frame: &mut Frame, area: Rect, config: Option<&ChartConfig>) {
    let Some(config) = config else {
        chart_placeholder(frame, area, " Revenue Trend ");
        return;
    };

    // Own the point vectors first; the datasets borrow them
    let series: Vec<(String, Color, Vec<(f64, f64)>)> = config
        .data
        .datasets
        .iter()
        .map(|spec| {
            let name = spec.label.clone().unwrap_or_default();
            let points = spec
                .data
                .iter()
                .enumerate()
                .map(|(i, value)| (i as f64, *value))
                .collect();
            (name, series_color(spec), points)
        })
        .collect();

    let y_max = series
        .iter()
        .flat_map(|(_, _, points)| points.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);
    let y_top = (y_max * 1.1).ceil().max(1.0);
    let x_max = config.data.labels.len().saturating_sub(1).max(1) as f64;

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let x_labels: Vec<Span> = config
        .data
        .labels
        .iter()
        .map(|label| Span::raw(label.clone()))
        .collect();
    let y_labels: Vec<Span> = [0.0, (y_top / 2.0).round(), y_top]
        .iter()
        .map(|value| Span::raw(axis_label(config, *value)))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Revenue Trend ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_top])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Draw the location performance pane as a bar chart
pub fn draw_location_pane(frame: &mut Frame, area: Rect, config: Option<&ChartConfig>) {
    let Some(config) = config else {
        chart_placeholder(frame, area, " Location Revenue (\u{20b9}M) ");
        return;
    };

    let spec = config.data.datasets.first();
    let values = spec.map(|s| s.data.as_slice()).unwrap_or(&[]);

    let bars: Vec<Bar> = config
        .data
        .labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| {
            let color = spec.map(|s| point_color(s, i)).unwrap_or(Color::White);
            Bar::default()
                .label(Line::from(label.clone()))
                .value(bar_height(*value))
                .text_value(format!("{value:.1}"))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Location Revenue (\u{20b9}M) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// Draw the payment mix pane as one gauge per channel
pub fn draw_payment_pane(
    frame: &mut Frame,
    area: Rect,
    config: Option<&ChartConfig>,
    focused: bool,
    selected: usize,
) {
    let block = Block::default()
        .title(" Payment Mix ")
        .borders(Borders::ALL)
        .border_style(pane_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(config) = config else {
        let placeholder = Paragraph::new("chart unavailable")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    let spec = config.data.datasets.first();
    let constraints: Vec<Constraint> = config
        .data
        .labels
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .chain([Constraint::Min(0)])
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, label) in config.data.labels.iter().enumerate() {
        let value = spec.and_then(|s| s.data.get(i)).copied().unwrap_or(0.0);
        let ratio = if value.is_finite() {
            (value / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let color = spec.map(|s| point_color(s, i)).unwrap_or(Color::White);
        let label_style = if focused && i == selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let gauge = Gauge::default()
            .ratio(ratio)
            .label(Span::styled(format!("{label} {value}%"), label_style))
            .gauge_style(Style::default().fg(color).bg(Color::Black));
        frame.render_widget(gauge, rows[i * 2]);

        // Second tooltip line carries the precise collected amount
        if let Some(amount) = tooltip_lines(config, label, i, value).into_iter().nth(1) {
            let detail = Paragraph::new(format!("  {amount}"))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(detail, rows[i * 2 + 1]);
        }
    }
}

/// Draw the department performance table
pub fn draw_departments_pane(
    frame: &mut Frame,
    area: Rect,
    departments: &[DepartmentPerformance],
    focused: bool,
    selected: usize,
) {
    let header_cells = ["Department", "Revenue", "Share", "Patients", "\u{20b9}/Patient", "Growth"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = departments.iter().enumerate().map(|(idx, dept)| {
        let style = if focused && idx == selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let growth = dept.growth_percent;
        Row::new(vec![
            Cell::from(dept.department.clone()),
            Cell::from(format_compact_currency(dept.revenue as f64)),
            Cell::from(format!("{:.1}%", dept.share_of_total)),
            Cell::from(group_thousands(u64::from(dept.patient_count))),
            Cell::from(format!("\u{20b9}{}", group_indian(dept.avg_revenue_per_patient as i64))),
            Cell::from(trend_span(growth, "")),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Department Performance ")
            .borders(Borders::ALL)
            .border_style(pane_border(focused)),
    );
    frame.render_widget(table, area);
}

/// Draw the operational alerts list
pub fn draw_alerts_pane(
    frame: &mut Frame,
    area: Rect,
    alerts: &[OperationalAlert],
    focused: bool,
    selected: usize,
) {
    let items: Vec<ListItem> = alerts
        .iter()
        .map(|alert| {
            let heading = Line::from(vec![
                Span::styled(
                    format!(" {} ", alert.severity.label().to_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(severity_color(alert.severity)),
                ),
                Span::raw(" "),
                Span::styled(
                    alert.category.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" x{}", alert.occurrence_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let body = Line::from(Span::styled(
                format!("  {}", alert.description),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(vec![heading, body])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Operational Alerts ")
                .borders(Borders::ALL)
                .border_style(pane_border(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if focused {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the footer: organisation-wide stats plus keybindings
pub fn draw_status_footer(frame: &mut Frame, area: Rect, kpis: &KpiSnapshot) {
    let stats = Line::from(vec![
        Span::raw(format!(
            " Avg revenue/patient \u{20b9}{}",
            group_indian(kpis.avg_revenue_per_patient as i64)
        )),
        Span::raw(" | "),
        Span::raw(format!("Receivables {} days", kpis.account_receivable_days)),
        Span::raw(" | "),
        trend_span(kpis.trends.yearly, " YoY"),
    ]);
    let keys = Line::from(Span::styled(
        " [t/e/n/b]KPI detail [r/l]Chart detail [Tab]Pane [Up/Down]Select [Enter]Open [Esc]Close [q]Quit ",
        Style::default().fg(Color::DarkGray),
    ));
    let footer = Paragraph::new(vec![stats, keys]).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Draw the modal overlay for the open drill-down
pub fn draw_modal(frame: &mut Frame, content: &ModalContent) {
    let area = centered_rect(64, 70, frame.size());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", content.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match content {
        ModalContent::Kpi(detail) => draw_kpi_detail(frame, inner, detail),
        ModalContent::Chart(detail) => draw_chart_detail(frame, inner, detail),
        ModalContent::Payment(mode) => draw_payment_detail(frame, inner, mode),
        ModalContent::Department(dept) => draw_department_detail(frame, inner, dept),
        ModalContent::Alert(alert) => draw_alert_detail(frame, inner, alert),
    }
}

fn breakdown_line(row: &BreakdownRow) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<30}", row.label)),
        Span::raw(format!("{:>14}", format_precise_amount(row.value as f64))),
        Span::styled(
            format!("{:>8.1}%", row.percentage),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn insight_lines(insights: &[String]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Key Insights", Style::default().fg(Color::Cyan))),
    ];
    for insight in insights {
        lines.push(Line::from(format!("\u{2022} {}", insight)));
    }
    lines
}

fn draw_kpi_detail(frame: &mut Frame, area: Rect, detail: &KpiDetail) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format_precise_amount(detail.value as f64),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            trend_span(detail.trend, ""),
        ]),
    ];
    if !detail.breakdown.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Breakdown",
            Style::default().fg(Color::Cyan),
        )));
        for row in &detail.breakdown {
            lines.push(breakdown_line(row));
        }
    }
    lines.extend(insight_lines(&detail.insights));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_chart_detail(frame: &mut Frame, area: Rect, detail: &ChartDetail) {
    let mut lines = Vec::new();
    if !detail.breakdown.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Breakdown",
            Style::default().fg(Color::Cyan),
        )));
        for row in &detail.breakdown {
            lines.push(breakdown_line(row));
        }
    }
    lines.extend(insight_lines(&detail.insights));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_payment_detail(frame: &mut Frame, area: Rect, mode: &PaymentMode) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Share of collections: "),
            Span::styled(
                format!("{}%", mode.share_of_total),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Amount collected:     "),
            Span::styled(
                format_precise_amount(mode.amount as f64),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Intraday Collections",
            Style::default().fg(Color::Cyan),
        )),
    ];
    for point in &mode.intraday {
        lines.push(Line::from(format!(
            "  {:<8}{:>14}",
            point.time,
            format_precise_amount(point.amount as f64)
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_department_detail(frame: &mut Frame, area: Rect, dept: &DepartmentPerformance) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Revenue:         "),
            Span::styled(
                format_precise_amount(dept.revenue as f64),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Share of total:  {:.1}%", dept.share_of_total)),
        Line::from(format!(
            "Patients:        {}",
            group_thousands(u64::from(dept.patient_count))
        )),
        Line::from(format!(
            "Avg per patient: \u{20b9}{}",
            group_indian(dept.avg_revenue_per_patient as i64)
        )),
        Line::from(vec![
            Span::raw("Growth:          "),
            trend_span(dept.growth_percent, ""),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_alert_detail(frame: &mut Frame, area: Rect, alert: &OperationalAlert) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", alert.severity.label().to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(severity_color(alert.severity)),
            ),
            Span::raw(format!("  recorded {} times", alert.occurrence_count)),
        ]),
        Line::from(""),
        Line::from(alert.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Recommended Actions",
            Style::default().fg(Color::Cyan),
        )),
    ];
    for action in &alert.recommended_actions {
        lines.push(Line::from(format!("\u{2022} {}", action)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::data::ReferenceData;
    use dash_engine::chart::{payment_doughnut_config, revenue_trend_config};

    #[test]
    fn test_css_colors_map_to_rgb() {
        assert_eq!(tui_color("#3b82f6"), Color::Rgb(59, 130, 246));
        assert_eq!(tui_color("#ffffff"), Color::Rgb(255, 255, 255));
        assert_eq!(tui_color("rgba(16, 185, 129, 0.8)"), Color::Rgb(16, 185, 129));
    }

    #[test]
    fn test_unparseable_colors_fall_back_to_white() {
        assert_eq!(tui_color("transparent"), Color::White);
        assert_eq!(tui_color("#xyzxyz"), Color::White);
        assert_eq!(tui_color("#abc"), Color::White);
        assert_eq!(tui_color("rgba(600, 0, 0, 1)"), Color::White);
        assert_eq!(tui_color(""), Color::White);
    }

    #[test]
    fn test_series_color_uses_border_paint() {
        let data = ReferenceData::builtin();
        let config = revenue_trend_config(&data.revenue_trend);

        // Revenue is blue, Target is red, Expenses is amber
        assert_eq!(series_color(&config.data.datasets[0]), Color::Rgb(59, 130, 246));
        assert_eq!(series_color(&config.data.datasets[1]), Color::Rgb(239, 68, 68));
        assert_eq!(series_color(&config.data.datasets[2]), Color::Rgb(245, 158, 11));
    }

    #[test]
    fn test_point_color_uses_segment_paint() {
        let data = ReferenceData::builtin();
        let config = payment_doughnut_config(&data.payment_modes);
        let spec = &config.data.datasets[0];

        assert_eq!(point_color(spec, 0), Color::Rgb(59, 130, 246));
        assert_eq!(point_color(spec, 1), Color::Rgb(16, 185, 129));
        assert_eq!(point_color(spec, 2), Color::Rgb(245, 158, 11));
    }

    #[test]
    fn test_axis_label_uses_tick_formatter() {
        let data = ReferenceData::builtin();
        let trend = revenue_trend_config(&data.revenue_trend);
        assert_eq!(axis_label(&trend, 45.0), "\u{20b9}45 Cr");

        // The doughnut has no scales, so the plain fallback applies
        let doughnut = payment_doughnut_config(&data.payment_modes);
        assert_eq!(axis_label(&doughnut, 45.0), "45");
    }

    #[test]
    fn test_bar_height_keeps_one_decimal() {
        assert_eq!(bar_height(12.5), 125);
        assert_eq!(bar_height(4.52), 45);
        assert_eq!(bar_height(0.0), 0);
        assert_eq!(bar_height(-3.0), 0);
        assert_eq!(bar_height(f64::NAN), 0);
    }

    #[test]
    fn test_tooltip_lines_compose_channel_detail() {
        let data = ReferenceData::builtin();
        let config = payment_doughnut_config(&data.payment_modes);

        let lines = tooltip_lines(&config, "Cash", 0, 35.0);
        assert_eq!(lines[0], "Cash: 35%");
        assert_eq!(lines[1], "Amount: \u{20b9}1.60 Cr");
    }

    #[test]
    fn test_centered_rect_geometry() {
        let area = Rect::new(0, 0, 100, 100);
        let modal = centered_rect(50, 50, area);
        assert_eq!(modal, Rect::new(25, 25, 50, 50));
    }

    #[test]
    fn test_trend_span_direction_and_sign() {
        let up = trend_span(5.2, " vs yesterday");
        assert_eq!(up.content, "\u{2197} +5.2% vs yesterday");

        let down = trend_span(-2.3, "");
        assert_eq!(down.content, "\u{2198} -2.3%");
    }
}
