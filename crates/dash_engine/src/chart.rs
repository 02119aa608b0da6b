//! Declarative chart configurations and their builders.
//!
//! A [`ChartConfig`] fully describes one chart independently of any
//! renderer: kind, labelled series, paint, legend, axes and tooltip
//! composition. The serialised form is Chart.js-compatible JSON
//! (camelCase keys, `type` discriminator); the formatter closures are
//! skipped during serialisation and invoked directly by renderers.
//!
//! The three builders are pure functions over their input rows. Calling
//! one twice with the same rows yields the same configuration, which is
//! what makes destroy-and-recreate on resize safe.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use dash_core::format::{format_precise_amount, group_thousands};
use dash_core::model::{LocationPerformance, PaymentMode, RevenuePoint};

/// Blue of the revenue series and the cash channel.
pub const BLUE: &str = "#3b82f6";
/// Green of the digital channel.
pub const GREEN: &str = "#10b981";
/// Amber of the expense series and the insurance channel.
pub const AMBER: &str = "#f59e0b";
/// Red of the target series.
pub const RED: &str = "#ef4444";
/// Violet slot of the bar palette.
pub const VIOLET: &str = "#8b5cf6";
/// Grey slot of the bar palette.
pub const GREY: &str = "#6b7280";

/// Border palette cycled over bar rows, in display order.
pub const BAR_PALETTE: [&str; 6] = [BLUE, GREEN, AMBER, RED, VIOLET, GREY];

/// Translucent fills matching [`BAR_PALETTE`] slot for slot.
const BAR_FILLS: [&str; 6] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(107, 114, 128, 0.8)",
];

/// Charts plot rupee amounts in millions.
fn chart_units(value: u64) -> f64 {
    value as f64 / 1_000_000.0
}

/// Chart kind understood by renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Continuous series over categories.
    Line,
    /// One bar per category.
    Bar,
    /// Ring of proportional segments.
    Doughnut,
}

/// Solid or per-element paint.
///
/// Serialises to a single colour string or an array of them, matching
/// the two forms Chart.js accepts.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    /// One colour for the whole series.
    Solid(String),
    /// One colour per data element, cycled by the renderer if short.
    PerPoint(Vec<String>),
}

impl Paint {
    /// Solid paint from a colour token.
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }

    /// Per-element paint from colour tokens.
    pub fn per_point(colors: Vec<String>) -> Self {
        Paint::PerPoint(colors)
    }
}

/// The hovered element a tooltip label formatter receives.
#[derive(Clone, Debug, Default)]
pub struct TooltipContext {
    /// Label of the hovered series, e.g. `"Revenue"`.
    pub series_label: String,
    /// Category label of the hovered element, e.g. `"Jan"` or `"Cash"`.
    pub label: String,
    /// Index of the hovered element within its series.
    pub data_index: usize,
    /// Plotted value of the hovered element.
    pub value: f64,
}

/// Composes the tooltip body lines for one hovered element.
///
/// Cheap to clone; carried inside [`ChartConfig`] but skipped during
/// serialisation.
#[derive(Clone)]
pub struct LabelFormatter(Arc<dyn Fn(&TooltipContext) -> Vec<String> + Send + Sync>);

impl LabelFormatter {
    /// Wraps a composition closure.
    pub fn new(f: impl Fn(&TooltipContext) -> Vec<String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Composes the body lines for one hovered element.
    pub fn format(&self, context: &TooltipContext) -> Vec<String> {
        (self.0)(context)
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFormatter(..)")
    }
}

/// Formats one axis tick value.
#[derive(Clone)]
pub struct TickFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl TickFormatter {
    /// Wraps a tick formatting closure.
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Formats one tick value.
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TickFormatter(..)")
    }
}

/// One plotted series with its paint.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

/// Category labels plus the series plotted against them.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesSpec>,
}

/// Hover interaction behaviour.
#[derive(Clone, Debug, Serialize)]
pub struct InteractionSpec {
    pub intersect: bool,
    pub mode: String,
}

/// Legend placement and styling.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabelSpec>,
}

/// Styling of legend entries.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabelSpec {
    pub use_point_style: bool,
    pub padding: u32,
    pub font: FontSpec,
}

/// Font size and optional weight.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Tooltip chrome and body composition.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub padding: u32,
    /// Body line composition; invoked by renderers, not serialised.
    #[serde(skip)]
    pub label_formatter: Option<LabelFormatter>,
}

/// Grid line visibility and colour.
#[derive(Clone, Debug, Serialize)]
pub struct GridSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Tick styling and formatting for one axis.
#[derive(Clone, Debug, Serialize)]
pub struct TickSpec {
    pub font: FontSpec,
    pub color: String,
    /// Tick value formatting; invoked by renderers, not serialised.
    #[serde(skip)]
    pub formatter: Option<TickFormatter>,
}

/// One axis of a cartesian chart.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridSpec,
    pub ticks: TickSpec,
}

/// The axes of a cartesian chart; absent for radial kinds.
#[derive(Clone, Debug, Serialize)]
pub struct ScalesSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisSpec>,
}

/// Plugin block: legend and tooltip.
#[derive(Clone, Debug, Serialize)]
pub struct PluginSpec {
    pub legend: LegendSpec,
    pub tooltip: TooltipSpec,
}

/// Everything outside the data: sizing, interaction, plugins, axes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Inner hole of a doughnut, e.g. `"65%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionSpec>,
    pub plugins: PluginSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesSpec>,
}

/// A complete renderer-agnostic chart description.
#[derive(Clone, Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Shared tooltip chrome: white panel, dark text, faint blue border.
fn tooltip_chrome(label_formatter: LabelFormatter) -> TooltipSpec {
    TooltipSpec {
        background_color: "rgba(255, 255, 255, 0.95)".to_string(),
        title_color: "#1f2937".to_string(),
        body_color: "#1f2937".to_string(),
        border_color: "rgba(59, 130, 246, 0.2)".to_string(),
        border_width: 1,
        corner_radius: 8,
        padding: 12,
        label_formatter: Some(label_formatter),
    }
}

/// Value axis in crore with a faint grid, starting at zero.
fn crore_axis() -> AxisSpec {
    AxisSpec {
        begin_at_zero: Some(true),
        grid: GridSpec {
            display: None,
            color: Some("rgba(148, 163, 184, 0.1)".to_string()),
        },
        ticks: TickSpec {
            font: FontSpec {
                size: 11,
                weight: None,
            },
            color: "#64748b".to_string(),
            formatter: Some(TickFormatter::new(|value| format!("₹{value} Cr"))),
        },
    }
}

/// Gridless category axis.
fn category_axis(weight: Option<u32>) -> AxisSpec {
    AxisSpec {
        begin_at_zero: None,
        grid: GridSpec {
            display: Some(false),
            color: None,
        },
        ticks: TickSpec {
            font: FontSpec { size: 11, weight },
            color: "#64748b".to_string(),
            formatter: None,
        },
    }
}

/// Builds the monthly revenue/expense trend line chart.
///
/// Three series are plotted in millions: solid blue revenue with filled
/// area and prominent points, dashed red target without points, and
/// amber expenses with a lighter fill. The tooltip reports one
/// `"{series}: ₹{value} Cr"` line per hovered series.
pub fn revenue_trend_config(points: &[RevenuePoint]) -> ChartConfig {
    let labels: Vec<String> = points.iter().map(|p| p.period.clone()).collect();
    let revenue: Vec<f64> = points.iter().map(|p| chart_units(p.revenue)).collect();
    let target: Vec<f64> = points.iter().map(|p| chart_units(p.target)).collect();
    let expenses: Vec<f64> = points.iter().map(|p| chart_units(p.expenses)).collect();

    let datasets = vec![
        SeriesSpec {
            label: Some("Revenue".to_string()),
            data: revenue,
            border_color: Some(Paint::solid(BLUE)),
            background_color: Some(Paint::solid("rgba(59, 130, 246, 0.1)")),
            border_width: Some(3),
            fill: Some(true),
            tension: Some(0.4),
            point_background_color: Some(BLUE.to_string()),
            point_border_color: Some("#ffffff".to_string()),
            point_border_width: Some(2),
            point_radius: Some(6),
            ..SeriesSpec::default()
        },
        SeriesSpec {
            label: Some("Target".to_string()),
            data: target,
            border_color: Some(Paint::solid(RED)),
            background_color: Some(Paint::solid("transparent")),
            border_width: Some(2),
            border_dash: Some(vec![8, 4]),
            fill: Some(false),
            point_radius: Some(0),
            ..SeriesSpec::default()
        },
        SeriesSpec {
            label: Some("Expenses".to_string()),
            data: expenses,
            border_color: Some(Paint::solid(AMBER)),
            background_color: Some(Paint::solid("rgba(245, 158, 11, 0.15)")),
            border_width: Some(2),
            fill: Some(true),
            tension: Some(0.4),
            point_background_color: Some(AMBER.to_string()),
            point_border_color: Some("#ffffff".to_string()),
            point_border_width: Some(2),
            point_radius: Some(4),
            ..SeriesSpec::default()
        },
    ];

    let tooltip = tooltip_chrome(LabelFormatter::new(|ctx: &TooltipContext| {
        vec![format!("{}: ₹{} Cr", ctx.series_label, ctx.value)]
    }));

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData { labels, datasets },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: None,
            interaction: Some(InteractionSpec {
                intersect: false,
                mode: "index".to_string(),
            }),
            plugins: PluginSpec {
                legend: LegendSpec {
                    display: true,
                    position: Some("top".to_string()),
                    labels: Some(LegendLabelSpec {
                        use_point_style: true,
                        padding: 20,
                        font: FontSpec {
                            size: 12,
                            weight: Some(600),
                        },
                    }),
                },
                tooltip,
            },
            scales: Some(ScalesSpec {
                x: Some(category_axis(Some(500))),
                y: Some(crore_axis()),
            }),
        },
    }
}

/// Builds the per-branch revenue bar chart.
///
/// One revenue series in millions, painted by cycling the six-colour
/// palette over the rows. The tooltip composes three lines per bar from
/// the same rows the series was built from: revenue, grouped patient
/// count and growth.
pub fn location_bar_config(locations: &[LocationPerformance]) -> ChartConfig {
    let labels: Vec<String> = locations.iter().map(|l| l.location.clone()).collect();
    let data: Vec<f64> = locations.iter().map(|l| chart_units(l.revenue)).collect();
    let fills: Vec<String> = (0..locations.len())
        .map(|i| BAR_FILLS[i % BAR_FILLS.len()].to_string())
        .collect();
    let borders: Vec<String> = (0..locations.len())
        .map(|i| BAR_PALETTE[i % BAR_PALETTE.len()].to_string())
        .collect();

    let rows: Vec<LocationPerformance> = locations.to_vec();
    let tooltip = tooltip_chrome(LabelFormatter::new(move |ctx: &TooltipContext| {
        // Hover outside the captured rows degrades to the revenue line
        match rows.get(ctx.data_index) {
            Some(row) => vec![
                format!("Revenue: ₹{} Cr", ctx.value),
                format!("Patients: {}", group_thousands(u64::from(row.patient_count))),
                format!("Growth: {}%", row.growth_percent),
            ],
            None => vec![format!("Revenue: ₹{} Cr", ctx.value)],
        }
    }));

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![SeriesSpec {
                label: Some("Revenue".to_string()),
                data,
                background_color: Some(Paint::per_point(fills)),
                border_color: Some(Paint::per_point(borders)),
                border_width: Some(2),
                border_radius: Some(8),
                border_skipped: Some(false),
                ..SeriesSpec::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: None,
            interaction: None,
            plugins: PluginSpec {
                legend: LegendSpec {
                    display: false,
                    position: None,
                    labels: None,
                },
                tooltip,
            },
            scales: Some(ScalesSpec {
                x: Some(category_axis(None)),
                y: Some(crore_axis()),
            }),
        },
    }
}

/// Builds the payment channel doughnut.
///
/// Segment values are the channel shares and segment colours are each
/// channel's assigned token, in input order. The tooltip composes the
/// share line plus the precise collected amount.
pub fn payment_doughnut_config(modes: &[PaymentMode]) -> ChartConfig {
    let labels: Vec<String> = modes.iter().map(|m| m.name.clone()).collect();
    let data: Vec<f64> = modes.iter().map(|m| m.share_of_total).collect();
    let segment_colors: Vec<String> = modes.iter().map(|m| m.color.clone()).collect();

    let rows: Vec<PaymentMode> = modes.to_vec();
    let tooltip = tooltip_chrome(LabelFormatter::new(move |ctx: &TooltipContext| {
        let mut lines = vec![format!("{}: {}%", ctx.label, ctx.value)];
        if let Some(row) = rows.get(ctx.data_index) {
            lines.push(format!(
                "Amount: {}",
                format_precise_amount(row.amount as f64)
            ));
        }
        lines
    }));

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![SeriesSpec {
                data,
                background_color: Some(Paint::per_point(segment_colors)),
                border_color: Some(Paint::solid("#ffffff")),
                border_width: Some(3),
                hover_border_width: Some(4),
                hover_offset: Some(8),
                ..SeriesSpec::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: Some("65%".to_string()),
            interaction: None,
            plugins: PluginSpec {
                legend: LegendSpec {
                    display: false,
                    position: None,
                    labels: None,
                },
                tooltip,
            },
            scales: None,
        },
    }
}
