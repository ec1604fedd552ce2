use pretty_assertions::assert_eq;
use tagger_engine::{count_tags, decode_text, read_from, StopWordSet};

#[test]
fn utf8_passes_through() {
    let decoded = decode_text("naïve text".as_bytes());
    assert_eq!(decoded.text, "naïve text");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf8_bom_is_stripped() {
    let decoded = decode_text(b"\xEF\xBB\xBFthe cat");
    assert_eq!(decoded.text, "the cat");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf16_bom_selects_utf16() {
    let decoded = decode_text(b"\xFF\xFEh\x00i\x00");
    assert_eq!(decoded.text, "hi");
    assert_eq!(decoded.encoding_label, "UTF-16LE");
}

#[test]
fn legacy_bytes_still_decode() {
    let bytes = b"Le caf\xe9 est tr\xe8s bon et le th\xe9 aussi, d\xe9j\xe0 vu.";
    let decoded = decode_text(bytes);

    assert!(decoded.text.contains("est"));
    let tags = count_tags(&decoded.text, &StopWordSet::new());
    assert_eq!(tags.get("le"), Some(2));
    assert_eq!(tags.get("aussi"), Some(1));
}

#[test]
fn reader_source_decodes() {
    let decoded = read_from(&b"one two"[..], "inline").unwrap();
    assert_eq!(decoded.text, "one two");
}
