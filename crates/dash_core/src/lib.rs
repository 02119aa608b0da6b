//! # dash_core: Domain Foundation for the Acuity Dashboard
//!
//! ## Layer 1 (Foundation) Role
//!
//! dash_core is the bottom layer of the workspace, providing:
//! - Rupee display formatting and trend classification (`format`)
//! - Domain entities: KPIs, revenue points, payment modes, locations,
//!   departments, alerts (`model`)
//! - The built-in operational reference snapshot (`data`)
//! - Drill-down detail lookups with total fallbacks (`detail`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other dash_* crates, with a single
//! external dependency:
//! - serde: Serialisation support for the domain entities
//!
//! ## Determinism
//!
//! Everything in this crate is a pure function over static data. There is
//! no I/O, no clock access and no failure path: lookups fall back to
//! generic payloads rather than erroring, so a view layer can always
//! render something.
//!
//! ## Usage Examples
//!
//! ```rust
//! use dash_core::data::ReferenceData;
//! use dash_core::format::{classify_trend, format_compact_currency, Trend};
//!
//! let data = ReferenceData::builtin();
//! assert_eq!(format_compact_currency(data.kpis.total_revenue as f64), "₹4.6 Cr");
//! assert_eq!(classify_trend(data.kpis.trends.daily), Trend::Positive);
//!
//! // Unknown drill-down keys degrade to a generic payload
//! let detail = data.kpi_detail_for("unknownMetric");
//! assert!(detail.breakdown.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod data;
pub mod detail;
pub mod format;
pub mod model;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
