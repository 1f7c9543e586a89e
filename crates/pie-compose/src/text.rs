//! Sentence assembly helpers shared by every composer.

use pie_catalog::problems::shared::OTHER_SPECIFY;
use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};

/// Convert `HH:MM` (24-hour) to `H:MM AM/PM`. Input that is not a time is
/// returned unchanged.
pub fn format_time(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{hour12}:{minutes} {period}")
}

/// Collapse whitespace runs to one space and doubled periods (left behind
/// by empty clauses) to one.
pub fn normalize(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    loop {
        let next = out.replace(". .", ".").replace("..", ".");
        if next == out {
            return out;
        }
        out = next;
    }
}

pub fn ends_with_terminal(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}

/// Join sentences with single spaces, terminating each with a period unless
/// it already ends in punctuation. `None` when nothing is left to join.
pub fn join_sentences<I>(parts: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            if !ends_with_terminal(&out) {
                out.push('.');
            }
            out.push(' ');
        }
        out.push_str(part);
    }
    if out.is_empty() {
        return None;
    }
    if !ends_with_terminal(&out) {
        out.push('.');
    }
    Some(out)
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A select answer as it should appear in the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer<'a> {
    text: &'a str,
    specified: bool,
}

impl<'a> Answer<'a> {
    /// The option text, or the nurse's own wording for "Other (specify)".
    pub fn raw(&self) -> &'a str {
        self.text
    }

    /// Text for use mid-sentence. Option text is lower-cased; specified
    /// free text keeps its casing.
    pub fn embedded(&self) -> String {
        if self.specified {
            self.text.to_string()
        } else {
            self.text.to_lowercase()
        }
    }

    pub fn is(&self, option: &str) -> bool {
        !self.specified && self.text == option
    }
}

/// Look up an intervention answer, substituting the `-other` companion when
/// the chosen option is "Other (specify)" and the companion is filled in.
pub fn answer(state: &EncounterState, field: FieldId) -> Option<Answer<'_>> {
    let text = state.text(Section::Intervention, field)?;
    if text.contains(OTHER_SPECIFY)
        && let Some(specified) = field
            .other_companion()
            .and_then(|companion| state.text(Section::Intervention, companion))
    {
        return Some(Answer {
            text: specified,
            specified: true,
        });
    }
    Some(Answer {
        text,
        specified: false,
    })
}
