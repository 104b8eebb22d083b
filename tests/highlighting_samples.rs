//! End-to-end highlighting over small Logtalk sources.
//!
//! Each styled span prints as `[text|category]`, unstyled text prints as-is,
//! and every line is prefixed with its 1-based number.

use lgt_lex::logtalk::lexing::{coalesce, tokenize};

fn render(source: &str) -> String {
    let mut out = String::new();
    for (index, (line, spans)) in source.lines().zip(tokenize(source)).enumerate() {
        out.push_str(&format!("{}|", index + 1));
        for span in coalesce(&spans) {
            let text = &line[span.range.clone()];
            match span.category {
                Some(category) => {
                    out.push_str(&format!("[{}|{}]", text, category.wire_name()));
                }
                None => out.push_str(text),
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn entity_with_comment_and_clause() {
    let source = "\
:- object(point).

    % a point
    position(3, 14).

:- end_object.
";
    insta::assert_snapshot!(render(source), @r"
    1|[:- object|meta](point)[.|operator]
    2|
    3|    [% a point|comment]
    4|    position([3|number][,|operator] [14|number])[.|operator]
    5|
    6|[:- end_object|meta][.|operator]
    ");
}

#[test]
fn block_comment_state_spans_lines() {
    let source = "/* one\ntwo */ :- dynamic(speed/1).\n";
    insta::assert_snapshot!(render(source), @r"
    1|[/* one|comment]
    2|[two */|comment] [:- dynamic|meta](speed[/|operator][1|number])[.|operator]
    ");
}

#[test]
fn quoted_atom_with_escape() {
    let source = "greet :- write('hi\\nthere'), nl.\n";
    insta::assert_snapshot!(render(source), @r"
    1|greet [:-|operator] [write|builtin](['hi|atom][\n|string.escape][there'|atom])[,|operator] [nl|builtin][.|operator]
    ");
}

#[test]
fn sample_document_tokenizes_cleanly() {
    let source = include_str!("../docs/samples/points.lgt");
    let lines: Vec<&str> = source.lines().collect();
    let tokenized = tokenize(source);
    assert_eq!(tokenized.len(), lines.len());
    for (line, spans) in lines.iter().zip(&tokenized) {
        let mut cursor = 0;
        for span in spans {
            assert_eq!(span.range.start, cursor);
            assert!(span.range.end > span.range.start);
            cursor = span.range.end;
        }
        assert_eq!(cursor, line.len());
    }
    let first = tokenized[0]
        .iter()
        .find(|span| span.category.is_some())
        .expect("opening directive is styled");
    assert_eq!(&lines[0][first.range.clone()], ":- object");
}
