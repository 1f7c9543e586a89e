use jiff::Timestamp;

/// Rotating body text of the medical order review advisory.
pub const CLINICAL_TIPS: [&str; 7] = [
    "Illinois School Code requires annual medical order review. Best practice: verify orders monthly. Document \"medical orders reviewed and followed\" in diabetes and medication notes.",
    "Always document the 5 Rights: Right Student, Right Medication, Right Dose, Right Route, Right Time. This protects you legally and ensures patient safety.",
    "For PRN medications: Document the specific reason for administration and the student's response to treatment within 30-60 minutes.",
    "Delegation of care to unlicensed personnel requires RN assessment, training documentation, and ongoing supervision per Illinois Nurse Practice Act.",
    "Emergency medications (EpiPens, Diastat, glucagon) require staff training documentation. Update emergency action plans annually and after any incident.",
    "FERPA compliance: Never discuss student health information in hallways, staff rooms, or via unsecured email. Use \"need to know\" principle.",
    "Maintain daily medication logs separate from health office visit logs. Reconcile controlled substance counts monthly for accountability.",
];

/// The tip shown at `now`. Advances once per second.
pub fn clinical_tip(now: Timestamp) -> &'static str {
    let index = now.as_second().rem_euclid(CLINICAL_TIPS.len() as i64) as usize;
    CLINICAL_TIPS[index]
}
