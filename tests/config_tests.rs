use tasksift::config::{Config, OutputFormat};
use tasksift::context::{AppContext, TestContext};

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let config = Config::load_or_default(&ctx).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_reload() {
    let ctx = TestContext::new();
    let config = Config {
        output: OutputFormat::Json,
        log_level: "debug".to_string(),
        show_confidence: false,
        show_original_text: true,
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.log_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_partial_file_uses_serde_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "output = \"json\"\n").unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.output, OutputFormat::Json);
    assert_eq!(loaded.log_level, "warn");
    assert!(loaded.show_confidence);
    assert!(!loaded.show_original_text);
}

#[test]
fn test_broken_file_is_not_reported_as_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "output = [not toml").unwrap();

    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(Config::load_or_default(&ctx).is_err());
}

#[test]
fn test_unknown_log_level_falls_back_to_warn() {
    let config = Config {
        log_level: "chatty".to_string(),
        ..Config::default()
    };
    assert_eq!(config.log_filter(), log::LevelFilter::Warn);
}
