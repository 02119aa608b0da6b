//! Drill-down detail payloads for KPI tiles and charts.
//!
//! Lookups are keyed by opaque string tokens (the tile and chart
//! identifiers used across the view layer) and are total: an unknown key
//! yields a generic payload rather than an error, so a drill-down can
//! always open.

use serde::{Deserialize, Serialize};

use crate::data::ReferenceData;

/// Lookup key for the total revenue drill-down.
pub const KPI_TOTAL_REVENUE: &str = "totalRevenue";
/// Lookup key for the total expenses drill-down.
pub const KPI_TOTAL_EXPENSES: &str = "totalExpenses";
/// Lookup key for the net operating income drill-down.
pub const KPI_NET_INCOME: &str = "netIncome";
/// Lookup key for the bank balance drill-down.
pub const KPI_BANK_BALANCE: &str = "bankBalance";
/// Lookup key for the revenue trend chart drill-down.
pub const CHART_REVENUE: &str = "revenue";
/// Lookup key for the location chart drill-down.
pub const CHART_LOCATION: &str = "location";

/// One line of a drill-down decomposition.
///
/// `value` and `percentage` are signed: the net income decomposition
/// subtracts expenses as a negative row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Row label.
    pub label: String,
    /// Row amount, in rupees, negative for deductions.
    pub value: i64,
    /// Share of the decomposed total, in percentage points, signed.
    pub percentage: f64,
}

impl BreakdownRow {
    /// Builds a row from its parts.
    pub fn new(label: &str, value: i64, percentage: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            percentage,
        }
    }
}

/// Detail payload behind one KPI tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KpiDetail {
    /// Modal title.
    pub title: String,
    /// Headline amount, in rupees.
    pub value: u64,
    /// Headline movement, in percentage points.
    pub trend: f64,
    /// Decomposition of the headline amount.
    pub breakdown: Vec<BreakdownRow>,
    /// Narrative observations, in display order.
    pub insights: Vec<String>,
}

/// Detail payload behind one chart surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDetail {
    /// Modal title.
    pub title: String,
    /// Decomposition rows; empty for the built-in entries.
    pub breakdown: Vec<BreakdownRow>,
    /// Narrative observations, in display order.
    pub insights: Vec<String>,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

impl ReferenceData {
    /// Resolves the drill-down payload behind a KPI tile.
    ///
    /// Recognised keys are [`KPI_TOTAL_REVENUE`], [`KPI_TOTAL_EXPENSES`],
    /// [`KPI_NET_INCOME`] and [`KPI_BANK_BALANCE`]. The revenue and net
    /// income headlines are read from the live snapshot so the modal
    /// always agrees with the tile it came from. Any other key yields the
    /// generic fallback payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use dash_core::data::ReferenceData;
    /// use dash_core::detail::KPI_TOTAL_REVENUE;
    ///
    /// let data = ReferenceData::builtin();
    /// let detail = data.kpi_detail_for(KPI_TOTAL_REVENUE);
    /// assert_eq!(detail.value, data.kpis.total_revenue);
    ///
    /// let fallback = data.kpi_detail_for("somethingElse");
    /// assert_eq!(fallback.value, 0);
    /// assert!(fallback.breakdown.is_empty());
    /// ```
    pub fn kpi_detail_for(&self, key: &str) -> KpiDetail {
        match key {
            KPI_TOTAL_REVENUE => KpiDetail {
                title: "Total Revenue Analysis".to_string(),
                value: self.kpis.total_revenue,
                trend: self.kpis.trends.daily,
                breakdown: vec![
                    BreakdownRow::new("Surgical Revenue", 25_400_000, 55.6),
                    BreakdownRow::new("Consultation Fees", 8_120_000, 17.8),
                    BreakdownRow::new("Diagnostic Tests", 6_890_000, 15.1),
                    BreakdownRow::new("Pharmacy Sales", 3_265_000, 7.1),
                    BreakdownRow::new("Other Services", 2_000_000, 4.4),
                ],
                insights: owned(&[
                    "Revenue increased by 5.2% compared to yesterday",
                    "Surgical procedures contributed 55.6% of total revenue",
                    "Chennai and Madurai are top performing locations",
                    "Digital payment adoption increasing",
                ]),
            },
            KPI_TOTAL_EXPENSES => KpiDetail {
                title: "Total Expenses Analysis".to_string(),
                value: self.kpis.total_expenses,
                trend: -2.3,
                breakdown: vec![
                    BreakdownRow::new("Staff Salaries", 18_500_000, 57.0),
                    BreakdownRow::new("Medical Supplies", 7_200_000, 22.2),
                    BreakdownRow::new("Equipment Maintenance", 3_100_000, 9.5),
                    BreakdownRow::new("Utilities", 2_150_000, 6.6),
                    BreakdownRow::new("Other Operational", 1_500_000, 4.6),
                ],
                insights: owned(&[
                    "Expenses decreased by 2.3% from yesterday",
                    "Staff costs remain the largest expense category",
                    "Medical supply costs optimized through bulk purchasing",
                    "Energy efficiency initiatives reducing utility costs",
                ]),
            },
            KPI_NET_INCOME => KpiDetail {
                title: "Net Operating Income Analysis".to_string(),
                value: self.kpis.net_operating_income,
                trend: self.kpis.trends.monthly,
                breakdown: vec![
                    BreakdownRow::new("Gross Revenue", 45_675_000, 100.0),
                    BreakdownRow::new("Operating Expenses", -32_450_000, -71.0),
                    BreakdownRow::new("Net Operating Income", 13_225_000, 29.0),
                ],
                insights: owned(&[
                    "Operating margin improved to 29% this month",
                    "Revenue growth outpacing expense increases",
                    "Efficiency improvements contributing to higher margins",
                    "Strong performance across all service lines",
                ]),
            },
            KPI_BANK_BALANCE => KpiDetail {
                title: "Bank Balance Overview".to_string(),
                value: self.kpis.bank_balance,
                trend: 2.1,
                breakdown: vec![
                    BreakdownRow::new("Current Account", 45_000_000, 36.0),
                    BreakdownRow::new("Savings Account", 35_000_000, 28.0),
                    BreakdownRow::new("Fixed Deposits", 30_000_000, 24.0),
                    BreakdownRow::new("Investment Account", 15_000_000, 12.0),
                ],
                insights: owned(&[
                    "Strong liquidity position maintained",
                    "Balanced portfolio across account types",
                    "Fixed deposits providing stable returns",
                    "Ready for planned expansion investments",
                ]),
            },
            _ => KpiDetail {
                title: "KPI Details".to_string(),
                value: 0,
                trend: 0.0,
                breakdown: Vec::new(),
                insights: owned(&["No detailed analysis available for this metric"]),
            },
        }
    }

    /// Resolves the drill-down payload behind a chart surface.
    ///
    /// Recognised keys are [`CHART_REVENUE`] and [`CHART_LOCATION`]; any
    /// other key yields the generic fallback payload.
    pub fn chart_detail_for(&self, key: &str) -> ChartDetail {
        match key {
            CHART_REVENUE => ChartDetail {
                title: "Revenue Trend Analysis".to_string(),
                breakdown: Vec::new(),
                insights: owned(&[
                    "Revenue shows consistent upward trend over 6 months",
                    "Target achievement improved from 94% to 109%",
                    "Q2 performance exceeded expectations by 8.7%",
                    "Operating margin improved by 15% year-over-year",
                    "Digital payment adoption contributing to efficiency",
                ]),
            },
            CHART_LOCATION => ChartDetail {
                title: "Location Performance Details".to_string(),
                breakdown: Vec::new(),
                insights: owned(&[
                    "Madurai leads with ₹12.5 Cr revenue and 4,850 patients",
                    "Chennai shows highest revenue per patient at ₹2,500",
                    "Growth rate varies from 4.2% to 15.2% across locations",
                    "Tier-2 cities showing strong growth potential",
                    "Coimbatore and Tirunelveli performing above average",
                ]),
            },
            _ => ChartDetail {
                title: "Chart Analysis".to_string(),
                breakdown: Vec::new(),
                insights: owned(&["No detailed analysis available"]),
            },
        }
    }
}
