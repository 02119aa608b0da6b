//! Built-in operational reference snapshot.
//!
//! The dashboard is a presentation engine over one fixed snapshot of the
//! provider's books; nothing here performs I/O. [`ReferenceData::builtin`]
//! assembles the snapshot every view reads from. The figures are carried
//! exactly as reported by upstream bookkeeping: the store does not
//! cross-check that income equals revenue minus expenses or that channel
//! shares sum to one hundred.

use serde::{Deserialize, Serialize};

use crate::model::{
    DepartmentPerformance, IntradayPoint, KpiSnapshot, LocationPerformance, OperationalAlert,
    PaymentMode, RevenuePoint, Severity, TrendSet,
};

/// The complete reference snapshot backing the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Headline key performance indicators.
    pub kpis: KpiSnapshot,
    /// Monthly revenue, expenses and target, chronological.
    pub revenue_trend: Vec<RevenuePoint>,
    /// Collections per payment channel with intraday detail.
    pub payment_modes: Vec<PaymentMode>,
    /// Revenue and patient volume per branch, largest first.
    pub locations: Vec<LocationPerformance>,
    /// Revenue and growth per clinical department, largest first.
    pub departments: Vec<DepartmentPerformance>,
    /// Open operational alerts, highest severity first.
    pub alerts: Vec<OperationalAlert>,
}

impl ReferenceData {
    /// Builds the built-in operational snapshot.
    pub fn builtin() -> Self {
        Self {
            kpis: kpi_snapshot(),
            revenue_trend: revenue_trend(),
            payment_modes: payment_modes(),
            locations: locations(),
            departments: departments(),
            alerts: alerts(),
        }
    }
}

fn kpi_snapshot() -> KpiSnapshot {
    KpiSnapshot {
        total_revenue: 45_675_000,
        total_expenses: 32_450_000,
        net_operating_income: 13_225_000,
        avg_revenue_per_patient: 2_850,
        reconciliation_percentage: 98.5,
        cash_on_hand: 8_750_000,
        bank_balance: 125_000_000,
        account_receivable_days: 28,
        trends: TrendSet {
            daily: 5.2,
            monthly: 12.8,
            yearly: 18.5,
        },
    }
}

fn revenue_trend() -> Vec<RevenuePoint> {
    // Management target is flat across the half-year
    const TARGET: u64 = 45_000_000;
    let point = |period: &str, revenue: u64, expenses: u64| RevenuePoint {
        period: period.to_string(),
        revenue,
        expenses,
        target: TARGET,
    };
    vec![
        point("Jan", 42_500_000, 30_200_000),
        point("Feb", 38_900_000, 28_500_000),
        point("Mar", 45_200_000, 31_800_000),
        point("Apr", 47_300_000, 33_100_000),
        point("May", 44_800_000, 32_200_000),
        point("Jun", 48_900_000, 34_500_000),
    ]
}

fn intraday(points: &[(&str, u64)]) -> Vec<IntradayPoint> {
    points
        .iter()
        .map(|(time, amount)| IntradayPoint {
            time: time.to_string(),
            amount: *amount,
        })
        .collect()
}

fn payment_modes() -> Vec<PaymentMode> {
    vec![
        PaymentMode {
            name: "Cash".to_string(),
            share_of_total: 35.0,
            amount: 15_986_250,
            color: "#3b82f6".to_string(),
            intraday: intraday(&[
                ("09:00", 2_500_000),
                ("12:00", 4_200_000),
                ("15:00", 3_800_000),
                ("18:00", 5_486_250),
            ]),
        },
        PaymentMode {
            name: "Digital".to_string(),
            share_of_total: 60.0,
            amount: 27_405_000,
            color: "#10b981".to_string(),
            intraday: intraday(&[
                ("09:00", 4_700_000),
                ("12:00", 8_600_000),
                ("15:00", 7_100_000),
                ("18:00", 7_005_000),
            ]),
        },
        PaymentMode {
            name: "Insurance".to_string(),
            share_of_total: 5.0,
            amount: 2_283_750,
            color: "#f59e0b".to_string(),
            intraday: intraday(&[
                ("09:00", 400_000),
                ("12:00", 800_000),
                ("15:00", 600_000),
                ("18:00", 483_750),
            ]),
        },
    ]
}

fn locations() -> Vec<LocationPerformance> {
    let branch = |location: &str, revenue: u64, patient_count: u32, growth_percent: f64| {
        LocationPerformance {
            location: location.to_string(),
            revenue,
            patient_count,
            growth_percent,
        }
    };
    vec![
        branch("Madurai", 12_500_000, 4_850, 15.2),
        branch("Chennai", 9_800_000, 3_920, 12.8),
        branch("Coimbatore", 8_200_000, 3_240, 8.5),
        branch("Tirunelveli", 7_300_000, 2_890, 10.2),
        branch("Salem", 4_900_000, 1_950, 6.8),
        branch("Others", 2_975_000, 1_180, 4.2),
    ]
}

fn departments() -> Vec<DepartmentPerformance> {
    let dept = |department: &str,
                revenue: u64,
                share_of_total: f64,
                patient_count: u32,
                avg_revenue_per_patient: u64,
                growth_percent: f64| {
        DepartmentPerformance {
            department: department.to_string(),
            revenue,
            share_of_total,
            patient_count,
            avg_revenue_per_patient,
            growth_percent,
        }
    };
    vec![
        dept("Cataract", 18_200_000, 39.8, 6_200, 2_935, 18.5),
        dept("Retina", 12_400_000, 27.1, 2_800, 4_428, 22.3),
        dept("Glaucoma", 6_800_000, 14.9, 3_100, 2_193, 8.7),
        dept("Cornea", 4_200_000, 9.2, 1_850, 2_270, 12.1),
        dept("Pediatric", 2_300_000, 5.0, 1_200, 1_916, 15.8),
        dept("Others", 1_775_000, 3.9, 850, 2_088, 5.2),
    ]
}

fn alerts() -> Vec<OperationalAlert> {
    let alert = |category: &str,
                 occurrence_count: u32,
                 severity: Severity,
                 description: &str,
                 recommended_actions: &[&str]| {
        OperationalAlert {
            category: category.to_string(),
            occurrence_count,
            severity,
            description: description.to_string(),
            recommended_actions: recommended_actions.iter().map(|s| s.to_string()).collect(),
        }
    };
    vec![
        alert(
            "Revenue Mismatch",
            3,
            Severity::High,
            "Discrepancy found in Chennai and Salem branches",
            &[
                "Verify cash collection records",
                "Check digital payment reconciliation",
                "Contact branch managers",
            ],
        ),
        alert(
            "Unposted Transactions",
            12,
            Severity::Medium,
            "Pending transactions from yesterday evening",
            &[
                "Review transaction logs",
                "Post pending entries",
                "Update accounting system",
            ],
        ),
        alert(
            "Delayed Bank Credits",
            5,
            Severity::Medium,
            "Bank deposits not reflected in account",
            &[
                "Contact bank representative",
                "Verify deposit slips",
                "Follow up on processing",
            ],
        ),
        alert(
            "AR Delays",
            8,
            Severity::Low,
            "Insurance claims pending beyond 30 days",
            &[
                "Follow up with insurance companies",
                "Review claim documentation",
                "Escalate if necessary",
            ],
        ),
    ]
}
