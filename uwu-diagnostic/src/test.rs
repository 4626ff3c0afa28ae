use crate::{Diagnostic, Location, Message, Position, Source};
use pretty_assertions::assert_eq;
use std::{io::Write, path::PathBuf};

#[test]
fn test_1() {
    assert_eq!(
        Diagnostic::report_located_message(
            5,
            3,
            "test/file",
            &String::from("abcdefg"),
            &Message {
                content: String::from("some error"),
                addendum: None
            },
        ),
        [
            "test/file:5:3: error: some error",
            "  |",
            "5 | abcdefg",
            "  |   ^",
        ]
        .join("\n")
    )
}

#[test]
fn test_2() {
    assert_eq!(
        Diagnostic::report_located_message(
            10,
            2,
            "test/file",
            &String::from("abcdefg"),
            &Message {
                content: String::from("some error"),
                addendum: Some(String::from("more detail"))
            }
        ),
        [
            "test/file:10:2: error: some error",
            "   |",
            "10 | abcdefg",
            "   |  ^",
            "more detail",
        ]
        .join("\n")
    )
}

#[test]
fn report_all_unlocated_first() {
    let mut diagnostic = Diagnostic::new();
    diagnostic.item(
        Some(Location {
            source: Source::Interactive {
                label: String::from("merge"),
            },
            position: None,
        }),
        Message {
            content: String::from("non-exhaustive pattern match"),
            addendum: None,
        },
    );
    diagnostic.item(
        None,
        Message {
            content: String::from("file missing.json does not exist"),
            addendum: None,
        },
    );
    assert_eq!(diagnostic.len(), 2);

    let mut out = Vec::new();
    diagnostic.report_all(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        [
            "error: file missing.json does not exist",
            "merge: error: non-exhaustive pattern match",
            "",
        ]
        .join("\n")
    )
}

#[test]
fn report_all_sorted_by_position() {
    let source = Source::Interactive {
        label: String::from("input"),
    };
    let mut diagnostic = Diagnostic::new();
    for (line, content) in [(3, "third"), (1, "first"), (2, "second")] {
        diagnostic.item(
            Some(Location {
                source: source.clone(),
                position: Some(Position { line, column: 1 }),
            }),
            Message {
                content: String::from(content),
                addendum: None,
            },
        );
    }

    let mut out = Vec::new();
    diagnostic.report_all(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        [
            "input:1:1: error: first",
            "input:2:1: error: second",
            "input:3:1: error: third",
            "",
        ]
        .join("\n")
    )
}

#[test]
fn report_all_reads_file_excerpt() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("uwu-diagnostic-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[1, 2,").unwrap();
        writeln!(file, "  3 x]").unwrap();
    }

    let mut diagnostic = Diagnostic::new();
    diagnostic.item(
        Some(Location {
            source: Source::File { path: path.clone() },
            position: Some(Position { line: 2, column: 5 }),
        }),
        Message {
            content: String::from("expected `,` or `]`"),
            addendum: None,
        },
    );

    let mut out = Vec::new();
    diagnostic.report_all(&mut out).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        [
            format!("{}:2:5: error: expected `,` or `]`", path.display()),
            String::from("  |"),
            String::from("2 |   3 x]"),
            String::from("  |     ^"),
            String::new(),
        ]
        .join("\n")
    )
}

#[test]
fn error_heading() {
    assert_eq!(
        Diagnostic::report_error_heading(
            "data.json",
            Some(Position {
                line: 2,
                column: 7
            }),
            "expected `,` or `]`"
        ),
        "data.json:2:7: error: expected `,` or `]`"
    );
    assert_eq!(
        Diagnostic::report_error_heading("merge", None, "non-exhaustive pattern match"),
        "merge: error: non-exhaustive pattern match"
    );
}
