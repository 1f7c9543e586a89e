use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pie_core::models::field::FieldId;

/// How a field is captured on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Checkbox,
    Select,
    FreeText,
    NumericInput,
}

/// Bounds the form puts on a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputConstraints {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

/// One form field within a problem definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub constraints: Option<InputConstraints>,
    /// Placeholder for text and numeric inputs.
    pub input_label: Option<String>,
    /// Text the note uses when this checkbox is ticked.
    pub default_text: Option<String>,
    /// Checkboxes that start ticked when the problem is selected.
    #[serde(default)]
    pub checked_by_default: bool,
    /// Rendered as a multi-line text area.
    #[serde(default)]
    pub multiline: bool,
    /// Checkboxes presented together (e.g. glucose source).
    pub group: Option<String>,
}

impl FieldSpec {
    pub fn checkbox(id: FieldId, label: &str) -> Self {
        Self::base(id, label, FieldKind::Checkbox)
    }

    pub fn select(id: FieldId, label: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::base(id, label, FieldKind::Select)
        }
    }

    pub fn text(id: FieldId, label: &str, input_label: &str) -> Self {
        Self {
            input_label: Some(input_label.to_string()),
            ..Self::base(id, label, FieldKind::FreeText)
        }
    }

    pub fn textarea(id: FieldId, label: &str, input_label: &str) -> Self {
        Self {
            multiline: true,
            ..Self::text(id, label, input_label)
        }
    }

    pub fn numeric(
        id: FieldId,
        label: &str,
        input_label: &str,
        constraints: InputConstraints,
    ) -> Self {
        Self {
            input_label: Some(input_label.to_string()),
            constraints: Some(constraints),
            ..Self::base(id, label, FieldKind::NumericInput)
        }
    }

    pub fn in_group(self, group: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            ..self
        }
    }

    pub fn with_default_text(self, text: &str) -> Self {
        Self {
            default_text: Some(text.to_string()),
            ..self
        }
    }

    pub fn checked(self) -> Self {
        Self {
            checked_by_default: true,
            ..self
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == FieldKind::NumericInput
    }

    fn base(id: FieldId, label: &str, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.to_string(),
            kind,
            options: Vec::new(),
            constraints: None,
            input_label: None,
            default_text: None,
            checked_by_default: false,
            multiline: false,
            group: None,
        }
    }
}
