//! Integration tests for the config command: load, edit, save on disk.

use gitllm::config::{ConfigEdit, ConfigStore, Configuration};
use gitllm::error::ConfigError;

/// load -> apply -> save, the way `gitllm config` runs.
fn run_config(store: &ConfigStore, edit: ConfigEdit) -> Result<(), ConfigError> {
    let mut config = store.load()?;
    edit.apply(&mut config)?;
    store.save(&config)
}

#[test]
fn test_first_run_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());

    run_config(&store, ConfigEdit::default()).unwrap();

    assert!(dir.path().join(".gitllm").join("config.yml").is_file());
    assert_eq!(store.load().unwrap(), Configuration::default());
}

#[test]
fn test_written_file_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());

    run_config(&store, ConfigEdit::default()).unwrap();

    let yaml = std::fs::read_to_string(store.path()).unwrap();
    assert!(yaml.contains("defaultModel: gpt-4.1"));
    assert!(yaml.contains("style: concise"));
    assert!(yaml.contains("url: https://api.openai.com/v1"));
    assert!(!yaml.contains("default_model"));
}

#[test]
fn test_new_provider_with_url_key_and_model() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());

    run_config(
        &store,
        ConfigEdit {
            provider: Some("anthropic".to_string()),
            model: Some("claude-3-5-sonnet".to_string()),
            base_url: Some("https://proxy.internal/anthropic".to_string()),
            api_key: Some("sk-ant-123".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let config = store.load().unwrap();
    let anthropic = config.provider("anthropic").unwrap();
    assert_eq!(anthropic.url, "https://proxy.internal/anthropic");
    assert_eq!(anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert!(anthropic.lists("claude-3-5-sonnet"));
    assert_eq!(config.resolve_provider("claude-3-5-sonnet").unwrap(), "anthropic");
}

#[test]
fn test_repeated_edit_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());
    let edit = ConfigEdit {
        model: Some("gpt-4o".to_string()),
        default_model: Some("gpt-4o".to_string()),
        ..Default::default()
    };

    run_config(&store, edit.clone()).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();
    run_config(&store, edit).unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(first, second);
    let config = store.load().unwrap();
    assert_eq!(config.default_model, "gpt-4o");
    assert_eq!(
        config
            .provider("openai")
            .unwrap()
            .models
            .iter()
            .filter(|m| *m == "gpt-4o")
            .count(),
        1
    );
}

#[test]
fn test_api_key_without_provider_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());
    run_config(&store, ConfigEdit::default()).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let err = run_config(
        &store,
        ConfigEdit {
            api_key: Some("sk-orphan".to_string()),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::MissingProvider { flag: "--apiKey" }));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_hand_edited_file_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::in_dir(dir.path());
    std::fs::create_dir_all(dir.path().join(".gitllm")).unwrap();
    std::fs::write(
        store.path(),
        r#"defaultModel: llama3
style: detailed
providers:
  ollama:
    url: http://localhost:11434/v1
    models:
      - llama3
"#,
    )
    .unwrap();

    run_config(
        &store,
        ConfigEdit {
            provider: Some("ollama".to_string()),
            model: Some("mistral".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.default_model, "llama3");
    assert_eq!(config.style, "detailed");
    assert_eq!(
        config.provider("ollama").unwrap().models,
        vec!["llama3".to_string(), "mistral".to_string()]
    );
    assert!(config.provider("openai").is_none());
}
