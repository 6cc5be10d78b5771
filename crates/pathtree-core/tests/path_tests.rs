/// Path grammar tests: tokenizing keys, indices and slices, plus the error
/// cases that must fail without panicking.
use pathtree_core::{Container, IndexOp, Path, PathError, Segment};
use serde_json::json;

fn slice(start: Option<i64>, end: Option<i64>) -> IndexOp {
    IndexOp::Slice { start, end }
}

// ============================================================================
// 1. Well-formed paths
// ============================================================================

#[test]
fn single_key() {
    let path = Path::parse("abc").unwrap();
    assert_eq!(path.segments(), &[Segment::key("abc")]);
}

#[test]
fn nested_keys_with_index() {
    let path = Path::parse("abc.def[2].ghi").unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.segments()[0], Segment::key("abc"));
    assert_eq!(
        path.segments()[1],
        Segment {
            key: Some("def".into()),
            ops: vec![IndexOp::Index(2)],
        }
    );
    assert_eq!(path.segments()[2], Segment::key("ghi"));
}

#[test]
fn trailing_index_on_last_segment() {
    let path = Path::parse("abc.def[2].ghi[5]").unwrap();
    assert_eq!(path.segments()[2].ops, vec![IndexOp::Index(5)]);
}

#[test]
fn negative_index_is_kept_as_written() {
    let path = Path::parse("abc[-1]").unwrap();
    assert_eq!(path.segments()[0].ops, vec![IndexOp::Index(-1)]);
}

#[test]
fn slice_forms() {
    let ops = |p: &str| Path::parse(p).unwrap().segments()[0].ops.clone();
    assert_eq!(ops("a[2:5]"), vec![slice(Some(2), Some(5))]);
    assert_eq!(ops("a[2:]"), vec![slice(Some(2), None)]);
    assert_eq!(ops("a[:5]"), vec![slice(None, Some(5))]);
    assert_eq!(ops("a[:]"), vec![slice(None, None)]);
    assert_eq!(ops("a[-3:-1]"), vec![slice(Some(-3), Some(-1))]);
}

#[test]
fn several_brackets_in_one_segment() {
    let path = Path::parse("grid[1][2]").unwrap();
    assert_eq!(
        path.segments()[0].ops,
        vec![IndexOp::Index(1), IndexOp::Index(2)]
    );
}

#[test]
fn segment_starting_with_bracket_has_no_key() {
    let path = Path::parse("abc.[0]").unwrap();
    assert_eq!(path.segments()[1].key, None);
    assert_eq!(path.segments()[1].ops, vec![IndexOp::Index(0)]);
}

#[test]
fn empty_dot_segments_are_skipped() {
    let path = Path::parse("a..b.").unwrap();
    assert_eq!(path.segments(), &[Segment::key("a"), Segment::key("b")]);
}

#[test]
fn from_str_matches_parse() {
    let parsed: Path = "x.y[0]".parse().unwrap();
    assert_eq!(parsed, Path::parse("x.y[0]").unwrap());
}

#[test]
fn split_last_separates_final_segment() {
    let path = Path::parse("a.b[1].c").unwrap();
    let (last, init) = path.split_last();
    assert_eq!(last, &Segment::key("c"));
    assert_eq!(init.len(), 2);
}

// ============================================================================
// 2. Display round trip
// ============================================================================

#[test]
fn display_renders_canonical_form() {
    for text in ["abc", "abc.def[2].ghi[5]", "a[-1]", "a[2:5]", "a[:]", "a[1:][0]"] {
        assert_eq!(Path::parse(text).unwrap().to_string(), text);
    }
}

#[test]
fn display_normalizes_empty_segments() {
    assert_eq!(Path::parse(".a..b.").unwrap().to_string(), "a.b");
}

#[test]
fn serde_uses_the_string_form() {
    let path = Path::parse("a.b[-2]").unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#""a.b[-2]""#);
    let back: Path = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
    assert!(serde_json::from_str::<Path>(r#""""#).is_err());
}

// ============================================================================
// 3. Errors
// ============================================================================

#[test]
fn empty_inputs_are_empty_errors() {
    for text in ["", ".", "..", "..."] {
        assert_eq!(Path::parse(text), Err(PathError::Empty), "input {text:?}");
    }
    assert_eq!(Path::from_segments(Vec::new()), Err(PathError::Empty));
}

#[test]
fn unclosed_bracket() {
    assert!(matches!(
        Path::parse("a[1"),
        Err(PathError::Unclosed { segment }) if segment == "a[1"
    ));
}

#[test]
fn stray_characters() {
    assert!(matches!(Path::parse("a[1]x"), Err(PathError::Stray { .. })));
    assert!(matches!(Path::parse("a]"), Err(PathError::Stray { .. })));
    assert!(matches!(Path::parse("a[0]b[1]"), Err(PathError::Stray { .. })));
}

#[test]
fn invalid_bracket_content() {
    for text in ["a[]", "a[x]", "a[1:2:3]", "a[1.5]", "a[99999999999999999999]"] {
        assert!(
            matches!(Path::parse(text), Err(PathError::InvalidIndex { .. })),
            "input {text:?}"
        );
    }
}

#[test]
fn extreme_integers_parse() {
    let path = Path::parse("a[-9223372036854775808]").unwrap();
    assert_eq!(path.segments()[0].ops, vec![IndexOp::Index(i64::MIN)]);
}

#[test]
fn leading_plus_is_not_an_integer() {
    for text in ["a[+3]", "a[+1:]", "a[:+2]"] {
        assert!(
            matches!(Path::parse(text), Err(PathError::InvalidIndex { .. })),
            "input {text:?}"
        );
    }
}

// ============================================================================
// 4. Hand-built paths
// ============================================================================

#[test]
fn from_segments_accepts_what_parse_produces() {
    let parsed = Path::parse("a.[0].b[1:]").unwrap();
    let built = Path::from_segments(parsed.segments().to_vec()).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn from_segments_rejects_bare_segment() {
    let segments = vec![
        Segment::key("a"),
        Segment {
            key: None,
            ops: Vec::new(),
        },
    ];
    assert_eq!(Path::from_segments(segments), Err(PathError::EmptySegment));
}

#[test]
fn from_segments_rejects_keys_that_do_not_reparse() {
    for key in ["", "x.y", "x[0]", "x]"] {
        assert_eq!(
            Path::from_segments(vec![Segment::key(key)]),
            Err(PathError::InvalidKey { key: key.into() }),
            "key {key:?}"
        );
    }
}

#[test]
fn built_path_reads_like_parsed_path() {
    let c = Container::new(None, Some(json!({"a": [10, 20]}))).unwrap();
    let path = Path::from_segments(vec![Segment {
        key: Some("a".into()),
        ops: vec![IndexOp::Index(-1)],
    }])
    .unwrap();
    assert_eq!(path.to_string().parse::<Path>().unwrap(), path);
    assert_eq!(c.get_value(&path, json!("D")).unwrap(), json!(20));
}
