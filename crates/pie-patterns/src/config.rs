use serde::{Deserialize, Serialize};

use pie_catalog::limits;

/// Thresholds for the decision-support advisories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionSupportConfig {
    /// Medical orders are due for review after this many days.
    pub order_check_days: i64,
    /// Window for the frequent-visit advisory.
    pub frequent_visit_days: i64,
    /// Declared alongside the window but not read by any advisory.
    pub frequent_visit_count: usize,
    /// Notes inside the window that trigger the frequent-visit advisory.
    pub frequent_visit_trigger: usize,
    pub completeness_min_notes: u64,
    pub completeness_ratio: f64,
    pub diabetes_min_total: u64,
    pub diabetes_recent_count: usize,
    pub repeated_pattern_threshold: u64,
    pub ferpa_modulus: u64,
}

impl Default for DecisionSupportConfig {
    fn default() -> Self {
        Self {
            order_check_days: limits::ORDER_CHECK_DAYS,
            frequent_visit_days: limits::FREQUENT_VISIT_DAYS,
            frequent_visit_count: limits::FREQUENT_VISIT_COUNT,
            frequent_visit_trigger: limits::FREQUENT_VISIT_TRIGGER,
            completeness_min_notes: 15,
            completeness_ratio: 0.6,
            diabetes_min_total: 5,
            diabetes_recent_count: 3,
            repeated_pattern_threshold: 12,
            ferpa_modulus: 25,
        }
    }
}
