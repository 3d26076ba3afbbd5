//! Page break planning

mod calculator;
mod metrics;
mod strategy;

pub use calculator::{BreakPlan, BreakState, PageBreak, PageBreakCalculator};
pub use metrics::{CharWidthMetrics, FixedRowMetrics, RowMetrics};
pub use strategy::{BreakDecision, BreakStrategy};
