use crate::{LogLevel, LoggingConfig};

use std::path::PathBuf;
use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;

#[test]
fn test_log_level_parses_known_names_case_insensitively() {
    assert_that!(*LogLevel::parse_lenient("TRACE"), eq(LevelFilter::Trace));
    assert_that!(*LogLevel::parse_lenient("Debug"), eq(LevelFilter::Debug));
    assert_that!(*LogLevel::parse_lenient("warn"), eq(LevelFilter::Warn));
    assert_that!(*LogLevel::parse_lenient("error"), eq(LevelFilter::Error));
    assert_that!(*LogLevel::parse_lenient("off"), eq(LevelFilter::Off));
}

#[test]
fn given_invalid_log_level_when_parsed_then_info() {
    let level = LogLevel::from_str("verbose").unwrap();

    assert_that!(*level, eq(LevelFilter::Info));
}

#[test]
fn given_log_file_when_file_path_then_path_returned() {
    let config = LoggingConfig {
        file: Some(String::from("logs/folio.log")),
        ..LoggingConfig::default()
    };

    assert_that!(config.file_path(), eq(&Some(PathBuf::from("logs/folio.log"))));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_blank_log_file_when_validate_then_error() {
    let config = LoggingConfig {
        file: Some(String::from("  ")),
        ..LoggingConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
