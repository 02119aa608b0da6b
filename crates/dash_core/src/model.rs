//! Domain entities for the executive financial-operations dashboard.
//!
//! Monetary fields are whole rupees (`u64`); percentages, shares and
//! growth rates are percentage points (`f64`); volumes are counts
//! (`u32`). The entities describe one operational snapshot of a
//! multi-location eye-care provider and carry no behaviour beyond
//! display classification.

use serde::{Deserialize, Serialize};

/// Daily, monthly and yearly movement of the headline figures.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendSet {
    /// Movement versus the previous day, in percentage points.
    pub daily: f64,
    /// Movement versus the previous month, in percentage points.
    pub monthly: f64,
    /// Movement versus the previous year, in percentage points.
    pub yearly: f64,
}

/// Headline key performance indicators shown on the KPI tiles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Total revenue collected, in rupees.
    pub total_revenue: u64,
    /// Total operating expenses, in rupees.
    pub total_expenses: u64,
    /// Net operating income, in rupees.
    ///
    /// Carried as reported by upstream bookkeeping; the store does not
    /// recompute it from revenue and expenses.
    pub net_operating_income: u64,
    /// Average revenue collected per patient, in rupees.
    pub avg_revenue_per_patient: u64,
    /// Share of transactions reconciled against bank records, 0 to 100.
    pub reconciliation_percentage: f64,
    /// Cash held across branches, in rupees.
    pub cash_on_hand: u64,
    /// Aggregate bank balance, in rupees.
    pub bank_balance: u64,
    /// Average accounts-receivable age, in days.
    pub account_receivable_days: u32,
    /// Headline revenue movement across the three horizons.
    pub trends: TrendSet,
}

/// One month of the revenue trend series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Reporting period label, e.g. `"Jan"`.
    pub period: String,
    /// Revenue for the period, in rupees.
    pub revenue: u64,
    /// Expenses for the period, in rupees.
    pub expenses: u64,
    /// Management revenue target for the period, in rupees.
    pub target: u64,
}

/// A collection amount recorded at one point of the business day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntradayPoint {
    /// Wall-clock label, e.g. `"09:00"`.
    pub time: String,
    /// Amount collected in the slot ending at `time`, in rupees.
    pub amount: u64,
}

/// Collections through one payment channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMode {
    /// Channel name, e.g. `"Cash"`.
    pub name: String,
    /// Share of total collections, 0 to 100.
    pub share_of_total: f64,
    /// Amount collected through this channel, in rupees.
    pub amount: u64,
    /// Colour token assigned to this channel in every chart.
    pub color: String,
    /// Intraday collection detail, chronological.
    pub intraday: Vec<IntradayPoint>,
}

/// Revenue and patient volume of one branch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationPerformance {
    /// Branch name.
    pub location: String,
    /// Branch revenue, in rupees.
    pub revenue: u64,
    /// Patients seen at the branch.
    pub patient_count: u32,
    /// Revenue growth versus the prior period, in percentage points.
    pub growth_percent: f64,
}

/// Revenue and growth of one clinical department.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    /// Department name, e.g. `"Cataract"`.
    pub department: String,
    /// Department revenue, in rupees.
    pub revenue: u64,
    /// Share of total revenue, 0 to 100.
    pub share_of_total: f64,
    /// Patients treated by the department.
    pub patient_count: u32,
    /// Average revenue per patient, in rupees.
    pub avg_revenue_per_patient: u64,
    /// Revenue growth versus the prior period, in percentage points.
    pub growth_percent: f64,
}

/// Severity of an operational alert.
///
/// Parsing is total: labels other than `high` and `medium` fall back to
/// [`Severity::Low`], so malformed upstream data degrades instead of
/// failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs attention today.
    High,
    /// Needs attention this week.
    Medium,
    /// Informational.
    Low,
}

impl Severity {
    /// Parses a severity label, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use dash_core::model::Severity;
    ///
    /// assert_eq!(Severity::from_label("high"), Severity::High);
    /// assert_eq!(Severity::from_label("Medium"), Severity::Medium);
    /// assert_eq!(Severity::from_label("whatever"), Severity::Low);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Returns the lowercase label for this severity.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Returns the style class token consumed by view layers.
    pub fn style_class(&self) -> &'static str {
        match self {
            Severity::High => "high-severity",
            Severity::Medium => "medium-severity",
            Severity::Low => "low-severity",
        }
    }
}

/// An open operational alert with its recommended follow-ups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationalAlert {
    /// Alert category, e.g. `"Revenue Mismatch"`.
    pub category: String,
    /// Number of open occurrences in this category.
    pub occurrence_count: u32,
    /// Alert severity.
    pub severity: Severity,
    /// Human-readable description of the condition.
    pub description: String,
    /// Suggested remediation steps, in order.
    pub recommended_actions: Vec<String>,
}
