pub mod diabetes;
pub mod first_aid;
pub mod medication;
pub mod other;

use pie_core::models::encounter::EncounterState;
use pie_core::models::field::FieldId;

use crate::text::answer;

/// "Parent/guardian contacted regarding ..." unless no contact was made.
pub(crate) fn parent_contact_sentence(state: &EncounterState) -> Option<String> {
    answer(state, FieldId::ParentContact)
        .filter(|contact| !contact.is("Not contacted"))
        .map(|contact| {
            format!(
                "Parent/guardian contacted regarding {}",
                contact.embedded()
            )
        })
}
