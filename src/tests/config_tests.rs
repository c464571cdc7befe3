//! Tests for the configuration module.

use crate::config::{
    completion::CompletionConfig, dictionary::DictionaryConfig, get_global_config,
    init_global_config, ConfigLoader, LogConfig, OleloConfig, Validate,
};
use crate::error::config::ConfigError;
use test_case::test_case;

use super::test_utils::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = OleloConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that validation catches invalid values in each section.
#[test]
fn test_config_validation() {
    let mut config = OleloConfig::default();

    config.dictionary.max_word_length = 0;
    assert!(config.validate().is_err());

    config.dictionary.max_word_length = 32;
    config.completion.default_max_results = config.completion.hard_limit + 1;
    assert!(config.validate().is_err());

    config.completion.default_max_results = 5;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test_case("trace" ; "trace level")]
#[test_case("debug" ; "debug level")]
#[test_case("info" ; "info level")]
#[test_case("warn" ; "warn level")]
#[test_case("error" ; "error level")]
fn test_valid_log_levels(level: &str) {
    let log = LogConfig {
        level: level.to_string(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_ok());
}

#[test_case(0, 10 => matches Err(ConfigError::ValueOutOfRange { .. }) ; "zero hard limit")]
#[test_case(5, 10 => matches Err(ConfigError::ValidationError(_)) ; "default above limit")]
#[test_case(10, 10 => matches Ok(()) ; "default equal to limit")]
#[test_case(100, 0 => matches Ok(()) ; "zero default")]
fn test_completion_validation(hard_limit: usize, default_max_results: usize) -> Result<(), ConfigError> {
    CompletionConfig {
        default_max_results,
        hard_limit,
    }
    .validate()
}

#[test]
fn test_empty_comment_prefix_rejected() {
    let config = DictionaryConfig {
        comment_prefix: Some(String::new()),
        ..DictionaryConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "olelo.toml",
            r#"
            [dictionary]
            word_list = "/usr/share/dict/words"
            max_word_length = 20

            [completion]
            default_max_results = 3
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_FILE").load().unwrap();

    assert_eq!(
        config.dictionary.word_list.as_deref(),
        Some(std::path::Path::new("/usr/share/dict/words"))
    );
    assert_eq!(config.dictionary.max_word_length, 20);
    assert_eq!(config.completion.default_max_results, 3);

    // Other values should be defaults
    assert_eq!(config.completion.hard_limit, 1000);
    assert!(config.dictionary.trim_whitespace);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("olelo.json", r#"{ "completion": { "hard_limit": 50 } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.completion.hard_limit, 50);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env.toml", "[completion]\ndefault_max_results = 3\n")
        .unwrap();
    fixture.set_env("TEST_ENV__COMPLETION__DEFAULT_MAX_RESULTS", "7");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();
    assert_eq!(config.completion.default_max_results, 7);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/does/not/exist.toml"), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that an unsupported extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("olelo.ini", "level=info").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[completion\nhard_limit = ten\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a file with values that fail validation is rejected.
#[test]
fn test_load_config_fails_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_LEVEL");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&OleloConfig::default()).unwrap();
    let parsed: OleloConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.completion.default_max_results, 10);
    assert_eq!(parsed.dictionary.comment_prefix.as_deref(), Some("#"));
    assert!(parsed.dictionary.word_list.is_none());
}

/// Test that the global configuration keeps the first value it is given.
///
/// This is the only test that touches the global configuration.
#[test]
fn test_global_config_first_write_wins() {
    let mut first = OleloConfig::default();
    first.completion.default_max_results = 4;
    init_global_config(first);

    let mut second = OleloConfig::default();
    second.completion.default_max_results = 9;
    init_global_config(second);

    assert_eq!(get_global_config().get().completion.default_max_results, 4);
}
