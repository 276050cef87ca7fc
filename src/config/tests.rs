use super::*;
use crate::error::ConfigError;
use std::fs;

fn project_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.model, "mistral-small-latest");
    let t = config.thresholds().unwrap();
    assert_eq!(t.warn, 0.80);
    assert_eq!(t.danger, 0.95);
}

#[test]
fn test_load_file_missing_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_file(&dir.path().join("nope.toml")).unwrap().is_none());
}

#[test]
fn test_load_file_partial() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[thresholds]\nwarn = 0.5\n").unwrap();
    let config = Config::load_file(&path).unwrap().unwrap();
    assert_eq!(config.model, "mistral-small-latest");
    assert_eq!(config.thresholds.warn, Some(0.5));
    assert_eq!(config.thresholds.danger, None);
}

#[test]
fn test_load_file_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "model = [").unwrap();
    let err = Config::load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_merge_project_wins() {
    let global = Config {
        model: "mistral-large-latest".into(),
        thresholds: ThresholdConfig {
            warn: Some(0.7),
            danger: Some(0.9),
        },
    };
    let project = Config {
        model: "open-mistral-7b".into(),
        thresholds: ThresholdConfig {
            warn: None,
            danger: Some(0.99),
        },
    };
    let merged = Config::merge(global, project);
    assert_eq!(merged.model, "open-mistral-7b");
    assert_eq!(merged.thresholds.warn, Some(0.7));
    assert_eq!(merged.thresholds.danger, Some(0.99));
}

#[test]
fn test_merge_default_project_model_keeps_global() {
    let global = Config {
        model: "mistral-large-latest".into(),
        ..Config::default()
    };
    let merged = Config::merge(global, Config::default());
    assert_eq!(merged.model, "mistral-large-latest");
}

#[test]
fn test_find_project_config_walks_up() {
    let root = project_root();
    fs::write(
        root.path().join("mistral-context.toml"),
        "model = \"open-mistral-7b\"\n",
    )
    .unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let found = Config::find_project_config(&nested).unwrap();
    assert_eq!(found, root.path().join("mistral-context.toml"));
}

#[test]
fn test_find_project_config_stops_at_git_root() {
    let root = project_root();
    let nested = root.path().join("src");
    fs::create_dir_all(&nested).unwrap();
    assert!(Config::find_project_config(&nested).is_none());
}

#[test]
fn test_load_layered_applies_project() {
    let root = project_root();
    fs::write(
        root.path().join("mistral-context.toml"),
        "model = \"mistral-medium-latest\"\n",
    )
    .unwrap();
    let config = Config::load_layered(Config::default(), root.path()).unwrap();
    if std::env::var("MISTRAL_MODEL").map_or(true, |m| m.is_empty()) {
        assert_eq!(config.model, "mistral-medium-latest");
    }
}

#[test]
fn test_load_layered_rejects_bad_thresholds() {
    let root = project_root();
    fs::write(
        root.path().join("mistral-context.toml"),
        "[thresholds]\nwarn = 0.99\ndanger = 0.5\n",
    )
    .unwrap();
    let err = Config::load_layered(Config::default(), root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
}

#[test]
fn test_thresholds_validation() {
    let mut config = Config::default();
    config.thresholds.warn = Some(0.0);
    assert!(config.thresholds().is_err());
    config.thresholds.warn = Some(0.5);
    config.thresholds.danger = Some(1.5);
    assert!(config.thresholds().is_err());
    config.thresholds.danger = Some(0.5);
    assert!(config.thresholds().is_ok());
}

#[test]
fn test_resolve_str_env() {
    std::env::set_var("MISTRAL_CONTEXT_TEST_MODEL", "mistral-large-latest");
    assert_eq!(
        Config::resolve_str("{env:MISTRAL_CONTEXT_TEST_MODEL}"),
        "mistral-large-latest"
    );
    assert_eq!(
        Config::resolve_str("x-{env:MISTRAL_CONTEXT_TEST_UNSET}-y"),
        "x--y"
    );
    assert_eq!(Config::resolve_str("{env:broken"), "{env:broken");
}

#[test]
fn test_write_default_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    Config::write_default(&path).unwrap();
    let config = Config::load_file(&path).unwrap().unwrap();
    assert_eq!(config.model, "mistral-small-latest");
    assert_eq!(config.thresholds.warn, Some(0.80));
    assert_eq!(config.thresholds.danger, Some(0.95));
    assert!(Config::write_default(&path).is_err());
}
