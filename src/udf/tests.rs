//! Unit tests for the request processor.

use std::collections::HashMap;
use std::io::Cursor;

use rstest::rstest;

use super::*;

fn run_to_lines(mode: Mode, input: &str) -> (RunSummary, Vec<String>) {
    let mut output = Vec::new();
    let summary = run(mode, Cursor::new(input.as_bytes()), &mut output).expect("stream must run");
    let output = String::from_utf8(output).expect("output must be UTF-8");

    (summary, output.lines().map(str::to_owned).collect())
}

fn roots_by_value(line: &str) -> HashMap<String, String> {
    let response: Response<GroupEntry> = serde_json::from_str(line).expect("response must parse");
    response.result.into_iter().map(|entry| (entry.value, entry.root)).collect()
}

fn v_roots_by_u(line: &str) -> HashMap<String, String> {
    let response: Response<AssociationEntry> =
        serde_json::from_str(line).expect("response must parse");
    response.result.into_iter().map(|entry| (entry.u, entry.v_root)).collect()
}

#[test]
fn edges_are_grouped() {
    let input = r#"{"edges":[["user1","user2"],["user2","user3"],["user4","user5"]]}"#;
    let (summary, lines) = run_to_lines(Mode::UnionFind, input);

    assert_eq!(summary, RunSummary { processed: 1, rejected: 0 });
    assert_eq!(lines.len(), 1);

    let roots = roots_by_value(&lines[0]);
    assert_eq!(roots.len(), 5);
    assert_eq!(roots["user1"], roots["user2"]);
    assert_eq!(roots["user2"], roots["user3"]);
    assert_eq!(roots["user4"], roots["user5"]);
    assert_ne!(roots["user1"], roots["user4"]);
}

#[test]
fn relations_are_associated() {
    let input = concat!(
        r#"{"relations":[["entity1","group100"],["entity1","group101"],"#,
        r#"["entity2","group101"],["entity3","group200"]]}"#,
    );
    let (summary, lines) = run_to_lines(Mode::Bipartite, input);

    assert_eq!(summary.processed, 1);
    assert_eq!(lines.len(), 1);

    let v_roots = v_roots_by_u(&lines[0]);
    assert_eq!(v_roots.len(), 3);
    assert_eq!(v_roots["entity1"], v_roots["entity2"]);
    assert_ne!(v_roots["entity1"], v_roots["entity3"]);
    assert_eq!(v_roots["entity3"], "group200");
}

#[rstest]
#[case(Mode::UnionFind)]
#[case(Mode::Bipartite)]
fn empty_stream_produces_no_output(#[case] mode: Mode) {
    let (summary, lines) = run_to_lines(mode, "");

    assert_eq!(summary, RunSummary::default());
    assert!(lines.is_empty());
}

#[rstest]
#[case(Mode::UnionFind, r#"{"edges":[]}"#)]
#[case(Mode::Bipartite, r#"{"relations":[]}"#)]
#[case(Mode::UnionFind, "{}")]
fn empty_batch_has_empty_result(#[case] mode: Mode, #[case] input: &str) {
    let (_, lines) = run_to_lines(mode, input);

    assert_eq!(lines, [r#"{"result":[]}"#]);
}

#[test]
fn malformed_line_does_not_stop_the_stream() {
    let input = concat!(
        "{\"edges\":[[\"a\",\"b\"]]}\n",
        "not json\n",
        "{\"edges\":[[\"a\"]]}\n",
        "{\"edges\":[[\"c\",\"d\"]]}\n",
    );
    let (summary, lines) = run_to_lines(Mode::UnionFind, input);

    assert_eq!(summary, RunSummary { processed: 2, rejected: 2 });
    assert_eq!(lines.len(), 4);

    let record: ErrorRecord = serde_json::from_str(&lines[1]).expect("error record must parse");
    assert!(record.error.starts_with("line 2:"), "unexpected record: {}", record.error);
    let record: ErrorRecord = serde_json::from_str(&lines[2]).expect("error record must parse");
    assert!(record.error.starts_with("line 3:"), "unexpected record: {}", record.error);

    let roots = roots_by_value(&lines[3]);
    assert_eq!(roots["c"], roots["d"]);
    assert!(!roots.contains_key("a"));
}

#[test]
fn each_line_gets_a_fresh_structure() {
    let input = "{\"edges\":[[\"a\",\"b\"]]}\n{\"edges\":[[\"b\",\"c\"]]}\n";
    let (_, lines) = run_to_lines(Mode::UnionFind, input);

    assert_eq!(lines.len(), 2);
    assert_eq!(roots_by_value(&lines[0]).len(), 2);
    assert!(!roots_by_value(&lines[1]).contains_key("a"));
}

#[test]
fn blank_and_crlf_lines_are_handled() {
    let input = "\n   \r\n{\"relations\":[[\"u\",\"v\"]]}\r\n\n";
    let (summary, lines) = run_to_lines(Mode::Bipartite, input);

    assert_eq!(summary.processed, 1);
    assert_eq!(lines, [r#"{"result":[{"u":"u","v_root":"v"}]}"#]);
}

#[test]
fn parse_errors_are_line_local() {
    let err = process_line(Mode::Bipartite, 7, b"[1, 2]").expect_err("shape must be rejected");

    assert!(err.is_line_local());
    assert!(matches!(err, UdfError::Parse { line: 7, .. }));
}

#[test]
fn manifest_declares_both_functions() {
    for mode in [Mode::UnionFind, Mode::Bipartite] {
        let name = format!("<name>{}</name>", mode.function_name());
        assert!(UDF_MANIFEST.contains(&name), "missing {name}");
    }

    assert!(UDF_MANIFEST.contains("<command>bpuf --mode unionfind</command>"));
    assert!(UDF_MANIFEST.contains("<command>bpuf --mode bipartite</command>"));
    assert_eq!(UDF_MANIFEST.matches("<format>JSONEachRow</format>").count(), 2);
}

#[rstest]
#[case("unionfind", Mode::UnionFind)]
#[case("bipartite", Mode::Bipartite)]
fn modes_parse_from_their_flag_values(#[case] raw: &str, #[case] expected: Mode) {
    assert_eq!(Mode::from_str(raw, false), Ok(expected));
}
