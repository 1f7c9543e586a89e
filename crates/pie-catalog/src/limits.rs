//! Clinical limits table.
//!
//! Fixed thresholds behind the safety checks and the visit-frequency rules.
//! Glucose in mg/dL, insulin in units, carbohydrates in grams.

pub const BG_CRITICAL_LOW: f64 = 40.0;
pub const BG_WARNING_LOW: f64 = 70.0;
pub const BG_WARNING_HIGH: f64 = 250.0;
pub const BG_CRITICAL_HIGH: f64 = 400.0;

pub const INSULIN_WARNING_THRESHOLD: f64 = 20.0;
pub const INSULIN_CRITICAL_THRESHOLD: f64 = 50.0;

pub const CARB_WARNING_THRESHOLD: f64 = 150.0;
pub const CARB_CRITICAL_THRESHOLD: f64 = 250.0;

/// Days after which a medical order review is due again.
pub const ORDER_CHECK_DAYS: i64 = 30;

/// Window for the frequent-visit rule.
pub const FREQUENT_VISIT_DAYS: i64 = 7;
/// Declared visit count for the frequent-visit rule. The rule itself
/// triggers at [`FREQUENT_VISIT_TRIGGER`].
pub const FREQUENT_VISIT_COUNT: usize = 3;
pub const FREQUENT_VISIT_TRIGGER: usize = 8;

/// Glucose band a reading falls in. Only the critical bands gate input; the
/// warning bands are for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlucoseBand {
    CriticalLow,
    Low,
    InRange,
    High,
    CriticalHigh,
}

pub fn glucose_band(value: f64) -> GlucoseBand {
    if value > 0.0 && value < BG_CRITICAL_LOW {
        GlucoseBand::CriticalLow
    } else if value > 0.0 && value < BG_WARNING_LOW {
        GlucoseBand::Low
    } else if value > BG_CRITICAL_HIGH {
        GlucoseBand::CriticalHigh
    } else if value > BG_WARNING_HIGH {
        GlucoseBand::High
    } else {
        GlucoseBand::InRange
    }
}
