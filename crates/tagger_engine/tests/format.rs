use pretty_assertions::assert_eq;
use tagger_engine::{count_tags, format_tags, parse_tags, FrequencyMapping, StopWordSet};

#[test]
fn formats_one_line_per_tag() {
    let tags: FrequencyMapping = [("sat", 1), ("cat", 2)].into_iter().collect();
    let text = format_tags(&tags);

    let mut lines: Vec<_> = text.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["cat: 2", "sat: 1"]);
    assert!(text.ends_with('\n'));
}

#[test]
fn empty_mapping_formats_to_empty_text() {
    assert_eq!(format_tags(&FrequencyMapping::new()), "");
}

#[test]
fn format_then_parse_recovers_pairs() {
    let tags = count_tags(
        "the rain in spain falls mainly on the plain rain rain",
        &["the", "on"].into_iter().collect::<StopWordSet>(),
    );

    let parsed = parse_tags(&format_tags(&tags)).unwrap();
    assert_eq!(parsed, tags);
}

#[test]
fn parse_reports_line_numbers() {
    let err = parse_tags("cat: 2\nbroken\n").unwrap_err();
    assert_eq!(err.line, 2);

    let err = parse_tags("cat: two\n").unwrap_err();
    assert_eq!(err.line, 1);

    let err = parse_tags("cat: 0\n").unwrap_err();
    assert!(err.reason.contains("positive"));

    let err = parse_tags("cat: 1\ncat: 1\n").unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn parse_skips_blank_lines() {
    let parsed = parse_tags("\ncat: 2\n\n").unwrap();
    assert_eq!(parsed.get("cat"), Some(2));
    assert_eq!(parsed.len(), 1);
}
