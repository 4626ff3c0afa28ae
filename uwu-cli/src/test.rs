use crate::{
    programs::{self, PROGRAMS},
    run::{self, Config, RunError},
};
use pretty_assertions::assert_eq;
use std::{fs, path::PathBuf};
use uwu_diagnostic::Diagnostic;

fn config(program: Option<&str>) -> Config {
    Config {
        program: program.map(String::from),
        list: false,
        sort: None,
    }
}

fn run_config(config: Config) -> Result<String, RunError> {
    let mut out = Vec::new();
    run::run(config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn run_program(name: &str) -> String {
    run_config(config(Some(name))).unwrap()
}

fn report(err: RunError) -> String {
    let mut diagnostic = Diagnostic::new();
    err.report(&mut diagnostic);
    let mut out = Vec::new();
    diagnostic.report_all(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("uwu-cli-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn index() {
    assert_eq!(run_program("index"), "[0, 3, 9, 17, 21]\n[0, 3, 9, 17, 21]\n")
}

#[test]
fn merge() {
    assert_eq!(run_program("merge"), "[1, 2, 3, 4, 9, 10]\n")
}

#[test]
fn r#return() {
    assert_eq!(run_program("return"), "Hello!\n[2, 4]\n")
}

#[test]
fn currying() {
    assert_eq!(
        run_program("currying"),
        "THE NAME'S BOND, JAMES BOND\n7\n"
    )
}

#[test]
fn pipeline() {
    assert_eq!(
        run_program("pipeline"),
        "Some(3)\nSome(Tuple(2, 3))\nSome(11)\n"
    )
}

#[test]
fn run_all_in_order() {
    let output = run_config(config(None)).unwrap();
    let headers: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("-- "))
        .collect();
    assert_eq!(
        headers,
        vec![
            "-- index --",
            "-- merge --",
            "-- return --",
            "-- currying --",
            "-- pipeline --"
        ]
    );
    assert!(output.contains("-- merge --\n[1, 2, 3, 4, 9, 10]\n"));
}

#[test]
fn list() {
    let output = run_config(Config {
        list: true,
        ..config(None)
    })
    .unwrap();
    let names: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        PROGRAMS.iter().map(|program| program.name).collect::<Vec<_>>()
    );
}

#[test]
fn find_program() {
    assert_eq!(programs::find("merge").map(|program| program.name), Some("merge"));
    assert!(programs::find("main").is_none());
}

#[test]
fn unknown_program() {
    let err = run_config(config(Some("main"))).unwrap_err();
    assert_eq!(
        report(err),
        "error: unknown program \"main\"\n\
         available programs: index, merge, return, currying, pipeline\n"
    )
}

#[test]
fn sort_file() {
    let path = temp_file("sort.json", "[17, 9, 21, 3, 0]");
    let output = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    });
    let _ = fs::remove_file(&path);
    assert_eq!(
        output.unwrap(),
        "bubble_sort: [0, 3, 9, 17, 21]\nmerge_sort: [0, 3, 9, 17, 21]\n"
    )
}

#[test]
fn sort_file_of_strings() {
    let path = temp_file("strings.json", r#"["uwu", "None", "a"]"#);
    let output = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    });
    let _ = fs::remove_file(&path);
    assert_eq!(
        output.unwrap(),
        "bubble_sort: [\"None\", \"a\", \"uwu\"]\nmerge_sort: [\"None\", \"a\", \"uwu\"]\n"
    )
}

#[test]
fn sort_missing_file() {
    let path = std::env::temp_dir().join("uwu-cli-does-not-exist.json");
    let err = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    })
    .unwrap_err();
    assert_eq!(
        report(err),
        format!("error: file {} does not exist\n", path.display())
    )
}

#[test]
fn sort_syntax_error() {
    let path = temp_file("syntax.json", "[1, 2,\n  3 x]");
    let output = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    });
    let reported = report(output.unwrap_err());
    let _ = fs::remove_file(&path);
    let heading = format!("{}:2:", path.display());
    assert!(reported.starts_with(&heading), "{}", reported);
    assert!(reported.contains("error: expected `,` or `]`"), "{}", reported);
    assert!(reported.contains("2 |   3 x]"), "{}", reported);
}

#[test]
fn sort_mixed_array() {
    let path = temp_file("mixed.json", r#"[1, "a"]"#);
    let output = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    });
    let _ = fs::remove_file(&path);
    assert_eq!(
        report(output.unwrap_err()),
        "<: error: non-exhaustive pattern match\n\
         no pattern matched Tuple(\"a\", 1) (tag Tuple)\n"
    )
}

#[test]
fn sort_non_array() {
    let path = temp_file("object.json", r#"{"TAG": "None"}"#);
    let output = run_config(Config {
        sort: Some(path.clone()),
        ..config(None)
    });
    let _ = fs::remove_file(&path);
    match output {
        Err(RunError::MatchError(err)) => {
            assert_eq!(err.value, "None");
            assert_eq!(err.site.as_deref(), Some("reduce"));
        }
        other => panic!("expected a match error, got {:?}", other),
    }
}
