use super::*;

// =============================================================
// parse_api_base
// =============================================================

#[test]
fn api_base_defaults_to_same_origin() {
    assert_eq!(parse_api_base(None).unwrap(), "");
    assert_eq!(parse_api_base(Some("  ")).unwrap(), "");
}

#[test]
fn api_base_trims_trailing_slash() {
    assert_eq!(parse_api_base(Some("http://localhost:8080/")).unwrap(), "http://localhost:8080");
    assert_eq!(parse_api_base(Some("/backend/")).unwrap(), "/backend");
}

#[test]
fn api_base_keeps_https_origin() {
    assert_eq!(parse_api_base(Some("https://items.example.test")).unwrap(), "https://items.example.test");
}

#[test]
fn api_base_rejects_bare_host() {
    assert_eq!(
        parse_api_base(Some("localhost:8080")),
        Err(ConfigError::InvalidApiBase("localhost:8080".to_owned()))
    );
}

// =============================================================
// parse_log_level
// =============================================================

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(parse_log_level(None).unwrap(), log::Level::Info);
    assert_eq!(parse_log_level(Some("")).unwrap(), log::Level::Info);
}

#[test]
fn log_level_is_case_insensitive() {
    assert_eq!(parse_log_level(Some("DEBUG")).unwrap(), log::Level::Debug);
    assert_eq!(parse_log_level(Some("warn")).unwrap(), log::Level::Warn);
}

#[test]
fn log_level_rejects_unknown() {
    assert_eq!(parse_log_level(Some("loud")), Err(ConfigError::InvalidLogLevel("loud".to_owned())));
}

// =============================================================
// from_values
// =============================================================

#[test]
fn from_values_without_overrides_is_default() {
    let (config, rejected) = ClientConfig::from_values(None, None);
    assert_eq!(config, ClientConfig::default());
    assert!(rejected.is_empty());
}

#[test]
fn from_values_applies_valid_overrides() {
    let (config, rejected) = ClientConfig::from_values(Some("http://localhost:8080"), Some("trace"));
    assert_eq!(config.api_base, "http://localhost:8080");
    assert_eq!(config.log_level, log::Level::Trace);
    assert!(rejected.is_empty());
}

#[test]
fn from_values_falls_back_per_field() {
    let (config, rejected) = ClientConfig::from_values(Some("ftp://nope"), Some("error"));
    assert_eq!(config.api_base, "");
    assert_eq!(config.log_level, log::Level::Error);
    assert_eq!(rejected, vec![ConfigError::InvalidApiBase("ftp://nope".to_owned())]);
}
