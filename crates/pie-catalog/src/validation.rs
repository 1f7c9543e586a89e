//! Input safety rules applied before a value enters encounter state.
//!
//! Three response policies: negative numbers are silently clamped to zero,
//! values in a warning band produce an advisory signal, and values in a
//! critical band are only committed after an explicit human acknowledgment.

use tracing::{debug, warn};

use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, FieldValue};
use pie_core::models::signal::{SafetySignal, Severity, SignalKind};

use crate::fields::FieldSpec;
use crate::limits::{
    self, CARB_CRITICAL_THRESHOLD, CARB_WARNING_THRESHOLD, GlucoseBand,
    INSULIN_CRITICAL_THRESHOLD, INSULIN_WARNING_THRESHOLD,
};

/// Synchronous acknowledgment gate. The UI decides how the prompt is shown;
/// the validator only needs a yes or no.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Outcome of validating one raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Value to store, or `None` to leave the field unset.
    pub accepted: Option<FieldValue>,
    pub signals: Vec<SafetySignal>,
    /// A critical value was not acknowledged and the field was cleared.
    pub blocked: bool,
}

impl ValidationResult {
    fn accept(value: FieldValue) -> Self {
        Self {
            accepted: Some(value),
            signals: Vec::new(),
            blocked: false,
        }
    }

    fn accept_with(value: FieldValue, signal: SafetySignal) -> Self {
        Self {
            accepted: Some(value),
            signals: vec![signal],
            blocked: false,
        }
    }

    fn blocked(signals: Vec<SafetySignal>) -> Self {
        Self {
            accepted: None,
            signals,
            blocked: true,
        }
    }
}

/// Validate `raw` for `field`.
///
/// The field's kind is taken from the selected problem's catalog entry, or
/// from whichever problem declares it when none is selected. Only numeric
/// inputs are checked; everything else passes through unchanged.
pub fn validate(
    field: FieldId,
    raw: FieldValue,
    state: &EncounterState,
    confirm: &mut dyn Confirm,
) -> ValidationResult {
    let spec = state
        .problem()
        .and_then(|key| crate::problem(key).field(field))
        .or_else(|| crate::find_field(field));

    if !spec.is_some_and(FieldSpec::is_numeric) {
        return ValidationResult::accept(raw);
    }

    let text = match &raw {
        FieldValue::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => return ValidationResult::accept(raw),
    };

    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(field = %field, input = %text, "non-numeric input left unset");
            return ValidationResult {
                accepted: None,
                signals: Vec::new(),
                blocked: false,
            };
        }
    };

    if value < 0.0 {
        debug!(field = %field, value, "negative input clamped to 0");
        return ValidationResult::accept(FieldValue::text("0"));
    }
    let text = canonical_number(value);

    match field {
        FieldId::CarbsConsumed => check_carbs(value, text, confirm),
        FieldId::InsulinAdmin => check_insulin(value, text, confirm),
        FieldId::BgCheck => check_glucose(value, text, confirm),
        _ => ValidationResult::accept(FieldValue::Text(text)),
    }
}

/// Plain decimal rendering of a parsed input: no sign on zero, no exponent.
fn canonical_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn check_carbs(value: f64, text: String, confirm: &mut dyn Confirm) -> ValidationResult {
    if value > CARB_CRITICAL_THRESHOLD {
        let prompt = format!(
            "CRITICAL: Carbohydrate value of {value}g exceeds safe limit \
             ({CARB_CRITICAL_THRESHOLD}g).\n\n\
             This is unusually high for a single meal. Please verify:\n\
             - Is this a data entry error?\n\
             - Is this truly the amount consumed?\n\n\
             Confirm to cap at {CARB_CRITICAL_THRESHOLD}g, or cancel to re-enter."
        );
        if !confirm.confirm(&prompt) {
            warn!(field = %FieldId::CarbsConsumed, value, "critical carbohydrate value rejected");
            return ValidationResult::blocked(Vec::new());
        }
        return ValidationResult::accept_with(
            FieldValue::Text(CARB_CRITICAL_THRESHOLD.to_string()),
            SafetySignal {
                severity: Severity::Critical,
                kind: SignalKind::CarbohydrateCapped,
                field: FieldId::CarbsConsumed,
                title: "Critical: Carbohydrate Value".to_string(),
                message: format!(
                    "{value}g exceeds reasonable single-meal consumption \
                     (max {CARB_CRITICAL_THRESHOLD}g). Value capped at \
                     {CARB_CRITICAL_THRESHOLD}g. Verify this is not a data entry error."
                ),
                requires_acknowledgment: true,
            },
        );
    }

    if value > CARB_WARNING_THRESHOLD {
        return ValidationResult::accept_with(
            FieldValue::Text(text),
            SafetySignal {
                severity: Severity::Warning,
                kind: SignalKind::HighCarbohydrate,
                field: FieldId::CarbsConsumed,
                title: "High Carbohydrate Intake".to_string(),
                message: format!(
                    "{value}g is unusually high for a single meal (typical range: 30-100g). \
                     Verify accuracy and document reason if correct."
                ),
                requires_acknowledgment: false,
            },
        );
    }

    ValidationResult::accept(FieldValue::Text(text))
}

fn check_insulin(value: f64, text: String, confirm: &mut dyn Confirm) -> ValidationResult {
    let signal = |severity, requires_acknowledgment| SafetySignal {
        severity,
        kind: SignalKind::HighInsulinDose,
        field: FieldId::InsulinAdmin,
        title: "High Insulin Dose".to_string(),
        message: format!(
            "{value} units is a high dose. Verify medical orders, insulin-to-carb ratio, \
             and correction factor. Consider RN consultation."
        ),
        requires_acknowledgment,
    };

    if value > INSULIN_CRITICAL_THRESHOLD {
        let prompt = format!(
            "CRITICAL: Insulin dose of {value} units exceeds safe threshold \
             ({INSULIN_CRITICAL_THRESHOLD} units).\n\n\
             BEFORE PROCEEDING:\n\
             - Verify medical orders\n\
             - Double-check dose calculation\n\
             - Confirm insulin-to-carb ratio\n\
             - Verify correction factor\n\n\
             Confirm only if you have verified this dose is correct."
        );
        if !confirm.confirm(&prompt) {
            warn!(field = %FieldId::InsulinAdmin, value, "critical insulin dose rejected");
            return ValidationResult::blocked(Vec::new());
        }
        return ValidationResult::accept_with(
            FieldValue::Text(text),
            signal(Severity::Critical, true),
        );
    }

    if value > INSULIN_WARNING_THRESHOLD {
        return ValidationResult::accept_with(
            FieldValue::Text(text),
            signal(Severity::Warning, false),
        );
    }

    ValidationResult::accept(FieldValue::Text(text))
}

fn check_glucose(value: f64, text: String, confirm: &mut dyn Confirm) -> ValidationResult {
    let (signal, prompt) = match limits::glucose_band(value) {
        GlucoseBand::CriticalLow => (
            SafetySignal {
                severity: Severity::Critical,
                kind: SignalKind::CriticalHypoglycemia,
                field: FieldId::BgCheck,
                title: "Critical Hypoglycemia".to_string(),
                message: format!(
                    "BG {value} mg/dL is critically low. Follow hypoglycemia protocol: 15g \
                     fast-acting carbs, recheck in 15 min. Consider glucagon if unable to \
                     swallow. Document parent notification."
                ),
                requires_acknowledgment: true,
            },
            format!(
                "CRITICAL HYPOGLYCEMIA: BG {value} mg/dL is dangerously low.\n\n\
                 IMMEDIATE ACTIONS REQUIRED:\n\
                 - Give 15g fast-acting carbs\n\
                 - Recheck in 15 minutes\n\
                 - Stay with student\n\
                 - Notify parent\n\
                 - Consider glucagon if unable to swallow\n\n\
                 Confirm that you are taking appropriate action."
            ),
        ),
        GlucoseBand::CriticalHigh => (
            SafetySignal {
                severity: Severity::Critical,
                kind: SignalKind::CriticalHyperglycemia,
                field: FieldId::BgCheck,
                title: "Critical Hyperglycemia".to_string(),
                message: format!(
                    "BG {value} mg/dL is critically high. Check for ketones if able. Verify \
                     correction factor per orders. Notify parent and consider MD consultation \
                     if >400 mg/dL persists."
                ),
                requires_acknowledgment: true,
            },
            format!(
                "CRITICAL HYPERGLYCEMIA: BG {value} mg/dL is dangerously high.\n\n\
                 IMMEDIATE ACTIONS REQUIRED:\n\
                 - Check for ketones (if available)\n\
                 - Verify correction factor per orders\n\
                 - Notify parent immediately\n\
                 - Consider MD consultation\n\
                 - Monitor for DKA symptoms\n\n\
                 Confirm that you are taking appropriate action."
            ),
        ),
        GlucoseBand::Low | GlucoseBand::InRange | GlucoseBand::High => {
            return ValidationResult::accept(FieldValue::Text(text));
        }
    };

    if !confirm.confirm(&prompt) {
        warn!(field = %FieldId::BgCheck, value, kind = ?signal.kind, "critical glucose reading rejected");
        return ValidationResult::blocked(vec![signal]);
    }
    ValidationResult::accept_with(FieldValue::Text(text), signal)
}
