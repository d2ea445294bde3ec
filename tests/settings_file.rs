use lnk_opener::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();

    assert!(!settings.debug_logging);
    assert_eq!(settings.join_limit, 6);
    assert_eq!(settings.placeholder_dismiss_ms, 120);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let settings = Settings {
        debug_logging: true,
        join_limit: 8,
        placeholder_dismiss_ms: 250,
    };
    settings.save(path).unwrap();

    let loaded = Settings::load(path).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.join_limit, 8);
    assert_eq!(loaded.placeholder_dismiss_ms, 250);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true }"#).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.join_limit, 6);
    assert_eq!(loaded.placeholder_dismiss_ms, 120);
}
