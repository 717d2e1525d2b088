//! CLI batch integration tests.

use std::io::Write;

use namae_runtime::CliConfig;
use namae_runtime::cli::run_batch;

fn run(args: &[&str], stdin: &str) -> namae_foundation::Result<String> {
    let config = CliConfig::parse(args.iter().copied())?;
    let parser = config.build_parser()?;
    let mut out = Vec::new();
    run_batch(&config, &parser, stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn names_from_arguments() {
    let out = run(&["--builtin-lexicon", "Ludwig van Beethoven"], "").unwrap();
    assert_eq!(
        out.trim_end(),
        r#"Ludwig Beethoven  family="Beethoven" given="Ludwig" particle="van""#
    );
}

#[test]
fn json_output_from_stdin_lines() {
    let out = run(
        &["--builtin-lexicon", "--stdin", "--json"],
        "John Doe\nDoe, Jane; Max Roe\n",
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1].as_array().unwrap().len(), 2);
    assert_eq!(value[1][1]["family"], "Roe");
}

#[test]
fn json_input_single_string() {
    let out = run(
        &["--builtin-lexicon", "--json-input", "--json"],
        r#""Dr. John Doe""#,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["prefix"], "dr");
}

#[test]
fn json_input_rejects_numbers() {
    let err = run(&["--builtin-lexicon", "--json-input"], "[\"a\", 3]").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn json_input_with_names_is_rejected() {
    let err = run(
        &["--builtin-lexicon", "--json-input", "--json", "Plato"],
        r#"["John Doe"]"#,
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn ampersand_flag_splits() {
    let out = run(&["--builtin-lexicon", "--ampersand", "Simon & Garfunkel"], "").unwrap();
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn custom_lexicon_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ap").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let out = run(&["--lexicon", path.as_str(), "--json", "Rhys ap Gruffydd"], "").unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0][0]["particle"], "ap");
}

#[test]
fn unreadable_lexicon_file_fails() {
    let err = run(&["--lexicon", "/no/such/particles.txt", "John Doe"], "").unwrap_err();
    assert!(format!("{err}").contains("/no/such/particles.txt"));
}

#[test]
fn missing_input_file_fails() {
    let err = run(&["--builtin-lexicon", "-f", "/no/such/names.txt"], "").unwrap_err();
    assert!(matches!(err.kind, namae_foundation::ErrorKind::Io(_)));
}

#[test]
fn help_mentions_every_input_mode() {
    let help = namae_runtime::cli::help_text();
    for flag in ["--file", "--stdin", "--json-input", "--lexicon", "--ampersand"] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}
