use fitrank::scorer::{format_time, time_to_seconds};
use rstest::rstest;

// --- PARSING ---
#[rstest]
#[case("3:00", Some(180))]
#[case("0:59", Some(59))]
#[case("18:30", Some(1110))]
#[case("1:20:00", Some(4800))]
#[case("2:00:01", Some(7201))]
#[case("0:00:00", Some(0))]
#[case("1:30.5", Some(91))] // fractions round up
#[case("3:05.5", Some(186))]
#[case("3:00.0", Some(180))]
#[case("1:00:00.25", Some(3601))]
fn test_linear_conversion(#[case] raw: &str, #[case] expected: Option<i64>) {
    assert_eq!(time_to_seconds(raw), expected, "parse of '{}'", raw);
}

#[rstest]
#[case("")]
#[case("5")] // single field
#[case("1:2:3:4")] // too many fields
fn test_other_shapes_are_zero(#[case] raw: &str) {
    assert_eq!(time_to_seconds(raw), Some(0));
}

#[test]
fn test_out_of_range_fields_are_accepted() {
    // 1 minute + 75 seconds
    assert_eq!(time_to_seconds("1:75"), Some(135));
    assert_eq!(time_to_seconds("0:90:00"), Some(5400));
}

#[test]
fn test_empty_and_padded_fields() {
    assert_eq!(time_to_seconds("3:"), Some(180));
    assert_eq!(time_to_seconds(" 3 : 05 "), Some(185));
}

#[rstest]
#[case("abc:00")]
#[case("3:0x")]
#[case("1:inf")]
#[case("99999999999999999:00:00")]
fn test_malformed_fields(#[case] raw: &str) {
    assert_eq!(time_to_seconds(raw), None);
}

// --- FORMATTING ---
#[rstest]
#[case(0, "0:00")]
#[case(65, "1:05")]
#[case(180, "3:00")]
#[case(3599, "59:59")]
#[case(3600, "1:00:00")]
#[case(3661, "1:01:01")]
#[case(19800, "5:30:00")]
fn test_format_time(#[case] seconds: u64, #[case] expected: &str) {
    assert_eq!(format_time(seconds), expected);
}

#[test]
fn test_format_then_parse_reference_times() {
    for secs in [180u64, 1080, 2280, 4800, 10800] {
        assert_eq!(time_to_seconds(&format_time(secs)), Some(secs as i64));
    }
}
