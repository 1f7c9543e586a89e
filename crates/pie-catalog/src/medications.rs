//! Common school medications, used to flag likely misspelled names.

use pie_core::models::field::FieldId;
use pie_core::models::signal::{SafetySignal, Severity, SignalKind};

pub const COMMON_MEDICATIONS: &[&str] = &[
    // Pain & fever
    "Acetaminophen (Tylenol)",
    "Ibuprofen (Advil, Motrin)",
    "Naproxen (Aleve)",
    // ADHD
    "Methylphenidate (Ritalin, Concerta)",
    "Amphetamine/Dextroamphetamine (Adderall)",
    "Lisdexamfetamine (Vyvanse)",
    "Atomoxetine (Strattera)",
    "Guanfacine (Intuniv)",
    "Clonidine (Kapvay)",
    "Dexmethylphenidate (Focalin)",
    // Antibiotics
    "Amoxicillin",
    "Amoxicillin-Clavulanate (Augmentin)",
    "Azithromycin (Z-pack, Zithromax)",
    "Cephalexin (Keflex)",
    "Cefdinir (Omnicef)",
    // Respiratory
    "Albuterol inhaler (ProAir, Ventolin, ProAir RespiClick)",
    "Fluticasone inhaler (Flovent)",
    "Budesonide inhaler (Pulmicort)",
    "Levalbuterol (Xopenex)",
    "Albuterol nebulizer solution",
    "Montelukast (Singulair)",
    // Allergy
    "Diphenhydramine (Benadryl)",
    "Cetirizine (Zyrtec)",
    "Loratadine (Claritin)",
    "Fexofenadine (Allegra)",
    "Chlorpheniramine",
    // Emergency
    "Epinephrine auto-injector (EpiPen, Auvi-Q)",
    "Glucagon emergency kit",
    "Diazepam rectal gel (Diastat)",
    "Midazolam nasal spray (Nayzilam)",
    // Insulin
    "Insulin lispro (Humalog)",
    "Insulin aspart (Novolog)",
    "Insulin glargine (Lantus)",
    "Insulin detemir (Levemir)",
    "Insulin degludec (Tresiba)",
    "NPH insulin (Humulin N, Novolin N)",
    "Regular insulin (Humulin R, Novolin R)",
    // GI
    "Ondansetron (Zofran)",
    "Bismuth subsalicylate (Pepto-Bismol)",
    "Calcium carbonate (Tums)",
    "Omeprazole (Prilosec)",
    "Ranitidine (Zantac)",
    // Antiepileptic
    "Levetiracetam (Keppra)",
    "Valproic acid (Depakote)",
    "Lamotrigine (Lamictal)",
    "Carbamazepine (Tegretol)",
    // Other
    "Methylprednisolone dose pack (Medrol)",
    "Prednisone",
    "Olopatadine eye drops (Pataday, Patanol)",
    "Erythromycin eye ointment",
    "Hydrocortisone cream",
    "Bacitracin ointment",
    "Mupirocin ointment (Bactroban)",
];

/// Case-insensitive match against [`COMMON_MEDICATIONS`].
///
/// A name matches when it equals a known entry, is contained in one
/// ("Tylenol" in "Acetaminophen (Tylenol)"), or contains any of an entry's
/// parenthesised or comma-separated parts. Blank input counts as known.
pub fn is_known_medication(name: &str) -> bool {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return true;
    }

    COMMON_MEDICATIONS.iter().any(|known| {
        let known = known.to_lowercase();
        if known == normalized || known.contains(&normalized) {
            return true;
        }
        known
            .split(['(', ')', ','])
            .map(str::trim)
            .any(|part| !part.is_empty() && normalized.contains(part))
    })
}

/// Advisory for a medication name not found in the known list.
pub fn check_medication_name(name: &str) -> Option<SafetySignal> {
    if is_known_medication(name) {
        return None;
    }
    Some(SafetySignal {
        severity: Severity::Info,
        kind: SignalKind::UnrecognizedMedication,
        field: FieldId::MedName,
        title: "Unrecognized Medication".to_string(),
        message: "This medication name is not recognized. Please verify the spelling."
            .to_string(),
        requires_acknowledgment: false,
    })
}
