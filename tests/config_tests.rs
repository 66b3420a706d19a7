use std::io::Write;
use std::path::PathBuf;

use benchbot::core::config::{AppConfig, ExecutionMode, load_value};
use benchbot::errors::BotError;
use tempfile::NamedTempFile;

fn env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp env file");
    file.write_all(contents.as_bytes()).expect("write temp env file");
    file
}

#[test]
fn test_load_value_plain() {
    let file = env_file("DISCORD_RUST_TOKEN=abc.def.ghi\n");
    assert_eq!(load_value(file.path(), "DISCORD_RUST_TOKEN"), "abc.def.ghi");
}

#[test]
fn test_load_value_strips_one_pair_of_quotes() {
    let file = env_file("TOKEN=\"secret\"\nNESTED=\"\"inner\"\"\n");
    assert_eq!(load_value(file.path(), "TOKEN"), "secret");
    assert_eq!(load_value(file.path(), "NESTED"), "\"inner\"");
}

#[test]
fn test_load_value_keeps_unbalanced_quotes() {
    let file = env_file("LEFT=\"open\nRIGHT=close\"\n");
    assert_eq!(load_value(file.path(), "LEFT"), "\"open");
    assert_eq!(load_value(file.path(), "RIGHT"), "close\"");
}

#[test]
fn test_load_value_lone_quote_becomes_empty() {
    let file = env_file("LONE=\"\nPAIR=\"\"\n");
    assert_eq!(load_value(file.path(), "LONE"), "");
    assert_eq!(load_value(file.path(), "PAIR"), "");
}

#[test]
fn test_load_value_splits_on_first_equals() {
    let file = env_file("URL=https://example.com/?a=b\n");
    assert_eq!(load_value(file.path(), "URL"), "https://example.com/?a=b");
}

#[test]
fn test_load_value_skips_comments_blank_and_malformed_lines() {
    let file = env_file(
        "# TOKEN=commented\n\nTOKEN without equals\n#TOKEN=also commented\nTOKEN=real\n",
    );
    assert_eq!(load_value(file.path(), "TOKEN"), "real");
}

#[test]
fn test_load_value_first_match_wins() {
    let file = env_file("TOKEN=first\nTOKEN=second\n");
    assert_eq!(load_value(file.path(), "TOKEN"), "first");
}

#[test]
fn test_load_value_key_compared_exactly() {
    let file = env_file("TOKEN =spaced\nTOKENS=plural\n");
    assert_eq!(load_value(file.path(), "TOKEN"), "");
}

#[test]
fn test_load_value_handles_crlf_line_endings() {
    let file = env_file("TOKEN=\"windows\"\r\nOTHER=x\r\n");
    assert_eq!(load_value(file.path(), "TOKEN"), "windows");
}

#[test]
fn test_load_value_skips_lines_that_are_not_utf8() {
    let mut file = NamedTempFile::new().expect("create temp env file");
    file.write_all(b"# caf\xe9 latin-1 comment\nBROKEN=\xff\xfe\nTOKEN=abc\n")
        .expect("write temp env file");

    assert_eq!(load_value(file.path(), "TOKEN"), "abc");
    assert_eq!(load_value(file.path(), "BROKEN"), "");
}

#[test]
fn test_load_value_missing_key_and_empty_value_look_the_same() {
    let file = env_file("EMPTY=\nOTHER=value\n");
    assert_eq!(load_value(file.path(), "EMPTY"), "");
    assert_eq!(load_value(file.path(), "ABSENT"), "");
}

#[test]
fn test_load_value_nonexistent_file_returns_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path: PathBuf = dir.path().join("does-not-exist.env");
    assert_eq!(load_value(&path, "TOKEN"), "");
}

#[test]
fn test_app_config_load_success() {
    let file = env_file("# bot secrets\nDISCORD_RUST_TOKEN=\"tok\"\n");
    let config = AppConfig::load(file.path(), "DISCORD_RUST_TOKEN", ExecutionMode::Offload)
        .expect("token should load");

    assert_eq!(config.token, "tok");
    assert_eq!(config.token_key, "DISCORD_RUST_TOKEN");
    assert_eq!(config.execution, ExecutionMode::Offload);
}

#[test]
fn test_app_config_missing_token_is_error() {
    let file = env_file("DISCORD_RUST_TOKEN=\n");
    let result = AppConfig::load(file.path(), "DISCORD_RUST_TOKEN", ExecutionMode::Inline);

    match result {
        Err(BotError::ConfigurationMissing { key, .. }) => assert_eq!(key, "DISCORD_RUST_TOKEN"),
        other => panic!("Expected ConfigurationMissing, got {other:?}"),
    }
}

#[test]
fn test_app_config_missing_file_is_error() {
    let result = AppConfig::load("/nonexistent/benchbot.env", "TOKEN", ExecutionMode::Inline);
    assert!(matches!(result, Err(BotError::ConfigurationMissing { .. })));
}

#[test]
fn test_app_config_debug_redacts_token() {
    let file = env_file("TOKEN=super-secret\n");
    let config = AppConfig::load(file.path(), "TOKEN", ExecutionMode::Inline).unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_execution_mode_parsing() {
    assert_eq!("inline".parse::<ExecutionMode>().unwrap(), ExecutionMode::Inline);
    assert_eq!(" Offload ".parse::<ExecutionMode>().unwrap(), ExecutionMode::Offload);
    assert_eq!(ExecutionMode::default(), ExecutionMode::Inline);

    let err = "parallel".parse::<ExecutionMode>().unwrap_err();
    assert!(matches!(err, BotError::InvalidSetting { .. }));
}
