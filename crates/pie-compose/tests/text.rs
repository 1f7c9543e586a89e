use pie_compose::text::{capitalize_first, format_time, join_sentences, normalize};

#[test]
fn format_time_converts_to_twelve_hour() {
    assert_eq!(format_time("00:15"), "12:15 AM");
    assert_eq!(format_time("09:30"), "9:30 AM");
    assert_eq!(format_time("12:00"), "12:00 PM");
    assert_eq!(format_time("13:45"), "1:45 PM");
    assert_eq!(format_time("23:59"), "11:59 PM");
}

#[test]
fn format_time_passes_through_non_times() {
    assert_eq!(format_time(""), "");
    assert_eq!(format_time("noon"), "noon");
    assert_eq!(format_time("ab:cd"), "ab:cd");
}

#[test]
fn normalize_collapses_whitespace_and_periods() {
    assert_eq!(normalize("a  b. . c.."), "a b. c.");
    assert_eq!(normalize("  Student\n reports   pain. "), "Student reports pain.");
}

#[test]
fn join_sentences_terminates_and_spaces() {
    assert_eq!(
        join_sentences(["Done!", "next", "last."]).as_deref(),
        Some("Done! next. last.")
    );
    assert_eq!(join_sentences(["", "  "]), None);
    assert_eq!(join_sentences(Vec::<&str>::new()), None);
}

#[test]
fn capitalize_first_only_touches_first_letter() {
    assert_eq!(capitalize_first("applied ice, then rest"), "Applied ice, then rest");
    assert_eq!(capitalize_first(""), "");
}
