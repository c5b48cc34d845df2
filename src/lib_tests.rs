//! Tests for the core geometry: position resolver, snippet extractor, spans.

use super::*;

// ─── Position resolver ───────────────────────────────────────────────

#[test]
fn test_line_of_first_character_is_line_one() {
    assert_eq!(line_of("hello\nworld", 0).unwrap(), 1);
    assert_eq!(line_of("hello\nworld", 4).unwrap(), 1);
}

#[test]
fn test_line_of_terminator_at_offset_does_not_count() {
    // Offset 5 sits exactly on the '\n'; that terminator is not before it.
    assert_eq!(line_of("hello\nworld", 5).unwrap(), 1);
    // Offset 6 is past the '\n': line 2.
    assert_eq!(line_of("hello\nworld", 6).unwrap(), 2);
}

#[test]
fn test_line_of_end_of_text_is_allowed() {
    let text = "a\nb\nc";
    assert_eq!(line_of(text, text.len()).unwrap(), 3);
}

#[test]
fn test_line_of_empty_text() {
    assert_eq!(line_of("", 0).unwrap(), 1);
}

#[test]
fn test_line_of_out_of_range() {
    let err = line_of("abc", 4).unwrap_err();
    assert!(matches!(err, LocatorError::OutOfRangeOffset { offset: 4, len: 3 }));
}

#[test]
fn test_line_of_crlf_counts_like_lf() {
    // CRLF terminators contain exactly one '\n' each.
    let text = "one\r\ntwo\r\nthree";
    assert_eq!(line_of(text, text.find("two").unwrap()).unwrap(), 2);
    assert_eq!(line_of(text, text.find("three").unwrap()).unwrap(), 3);
}

// ─── Snippet extractor ───────────────────────────────────────────────

#[test]
fn test_snippet_exact_substring() {
    let text = "public int divide(int a, int b)";
    assert_eq!(snippet(text, Span::new(11, 17)).unwrap(), "divide");
}

#[test]
fn test_snippet_preserves_line_endings_verbatim() {
    let text = "line1\r\n\tline2\r\n";
    assert_eq!(snippet(text, Span::new(0, text.len())).unwrap(), text);
}

#[test]
fn test_snippet_empty_span() {
    assert_eq!(snippet("abc", Span::new(1, 1)).unwrap(), "");
}

#[test]
fn test_snippet_rejects_reversed_span() {
    let err = snippet("abcdef", Span::new(4, 2)).unwrap_err();
    assert!(matches!(err, LocatorError::InvalidSpan { start: 4, end: 2, .. }));
}

#[test]
fn test_snippet_rejects_span_past_end() {
    assert!(snippet("abc", Span::new(0, 4)).is_err());
}

#[test]
fn test_snippet_rejects_char_boundary_split() {
    // 'é' is two bytes; offset 1 splits it.
    let text = "é";
    assert!(snippet(text, Span::new(0, 1)).is_err());
}

// ─── Spans and line ranges ───────────────────────────────────────────

#[test]
fn test_span_contains() {
    let outer = Span::new(10, 50);
    assert!(outer.contains(&Span::new(10, 50)));
    assert!(outer.contains(&Span::new(20, 30)));
    assert!(!outer.contains(&Span::new(5, 30)));
    assert!(!outer.contains(&Span::new(20, 51)));
}

#[test]
fn test_line_range_from_span() {
    let text = "a\nbb\nccc\n";
    let range = LineRange::from_span(text, Span::new(2, 8)).unwrap();
    assert_eq!(range, LineRange { start_line: 2, end_line: 3 });
    assert_eq!(range.to_string(), "2-3");
}

#[test]
fn test_source_unit_rejects_oversized_root_span() {
    let root = ast::SyntaxNode::other(Span::new(0, 100), vec![]);
    let err = SourceUnit::new("f".to_string(), "short".to_string(), root).unwrap_err();
    assert!(matches!(err, LocatorError::InvalidSpan { .. }));
}

// ─── File helpers ────────────────────────────────────────────────────

#[test]
fn test_clean_path_strips_extended_prefix() {
    assert_eq!(clean_path(r"\\?\C:\src\A.java"), r"C:\src\A.java");
    assert_eq!(clean_path("/home/user/A.java"), "/home/user/A.java");
}

#[test]
fn test_read_file_lossy_utf8_and_non_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let ok = dir.path().join("ok.java");
    std::fs::write(&ok, "class A {}").unwrap();
    let (content, lossy) = read_file_lossy(&ok).unwrap();
    assert_eq!(content, "class A {}");
    assert!(!lossy);

    let bad = dir.path().join("bad.java");
    std::fs::write(&bad, [b'/', b'/', 0xFF, b'\n']).unwrap();
    let (_, lossy) = read_file_lossy(&bad).unwrap();
    assert!(lossy);
}

// ─── Properties ──────────────────────────────────────────────────────

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// line_of equals one plus the number of '\n' in the prefix, for
        /// any text and any valid char-boundary offset.
        #[test]
        fn line_of_counts_prefix_newlines(text in "[ -~\n]{0,200}", cut in 0usize..=200) {
            let offset = cut.min(text.len());
            let expected = text[..offset].matches('\n').count() as u32 + 1;
            prop_assert_eq!(line_of(&text, offset).unwrap(), expected);
        }

        /// Snippet of a valid span is exactly the slice of the original.
        #[test]
        fn snippet_matches_slice(text in "[a-z \n]{0,100}", a in 0usize..=100, b in 0usize..=100) {
            let start = a.min(text.len());
            let end = b.min(text.len());
            if start <= end {
                let span = Span::new(start, end);
                prop_assert_eq!(snippet(&text, span).unwrap(), &text[start..end]);
            }
        }

        /// line_of never decreases as the offset grows.
        #[test]
        fn line_of_is_monotonic(text in "[a-z\n]{0,100}") {
            let mut last = 0u32;
            for offset in 0..=text.len() {
                let line = line_of(&text, offset).unwrap();
                prop_assert!(line >= last);
                last = line;
            }
        }
    }
}
