use std::io::Cursor;

use super::*;

fn parse_str(text: &str) -> ParsedScores {
    parse_scores(Cursor::new(text.as_bytes().to_vec())).unwrap()
}

#[test]
fn test_parse_line_valid_pair() {
    assert_eq!(parse_line("80,90"), LineOutcome::Pair(ScorePair::new(80, 90)));
    assert_eq!(
        parse_line("  -5 ,  +12  "),
        LineOutcome::Pair(ScorePair::new(-5, 12))
    );
}

#[test]
fn test_parse_line_comment_only_at_first_char() {
    assert_eq!(parse_line("#midterm,final"), LineOutcome::Comment);
    assert_eq!(parse_line("#"), LineOutcome::Comment);
    assert_eq!(
        parse_line(" #indented"),
        LineOutcome::Skipped(SkippedLine::Malformed {
            line: "#indented".to_string()
        })
    );
}

#[test]
fn test_parse_line_malformed() {
    for raw in ["bad,line,extra", "80", "80,", "eighty,90", "1.5,2", "", "80,90,"] {
        match parse_line(raw) {
            LineOutcome::Skipped(SkippedLine::Malformed { line }) => {
                assert_eq!(line, raw.trim())
            }
            other => panic!("expected malformed for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_scores_mixed_input() {
    let parsed = parse_str("#comment\n80,90\nbad,line,extra\n70,60\n");
    assert_eq!(
        parsed.dataset,
        vec![ScorePair::new(80, 90), ScorePair::new(70, 60)]
    );
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(
        parsed.skipped[0].to_string(),
        "Warning: Skipping malformed line: bad,line,extra"
    );
}

#[test]
fn test_parse_scores_preserves_order_without_gaps() {
    let parsed = parse_str("3,4\r\n1,2\r\nx,y\r\n9,9");
    assert_eq!(
        parsed.dataset,
        vec![
            ScorePair::new(3, 4),
            ScorePair::new(1, 2),
            ScorePair::new(9, 9)
        ]
    );
    assert_eq!(parsed.skipped.len(), 1);
}

#[test]
fn test_each_malformed_line_drops_exactly_one_row() {
    let valid = (0..10).map(|i| format!("{i},{}", i * 2)).collect::<Vec<_>>();
    let all_valid = parse_str(&valid.join("\n"));
    assert_eq!(all_valid.dataset.len(), 10);

    let mut lines = valid.clone();
    lines[4] = "4;8".to_string();
    let one_bad = parse_str(&lines.join("\n"));
    assert_eq!(one_bad.dataset.len(), 9);
    assert_eq!(one_bad.skipped.len(), 1);
}

#[test]
fn test_invalid_utf8_is_skipped_with_cause() {
    let mut bytes = b"10,20\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b',', b'1', b'\n']);
    bytes.extend_from_slice(b"30,40\n");
    let parsed = parse_scores(Cursor::new(bytes)).unwrap();

    assert_eq!(
        parsed.dataset,
        vec![ScorePair::new(10, 20), ScorePair::new(30, 40)]
    );
    assert_eq!(parsed.skipped.len(), 1);
    let message = parsed.skipped[0].to_string();
    assert!(message.starts_with("Error: invalid utf-8"));
    assert!(message.ends_with("occurred while processing line: \u{fffd}\u{fffd},1"));
}

#[test]
fn test_empty_source() {
    let parsed = parse_str("");
    assert!(parsed.dataset.is_empty());
    assert!(parsed.skipped.is_empty());
}
