use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_settings_file_has_no_path() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(load_database_path(&tmp.path().join("settings.toml")), None);
}

#[test]
fn test_save_and_load_database_path() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("conf").join("settings.toml");

    save_database_path(&settings, Some(Path::new("/srv/media/catalog.db"))).unwrap();
    assert_eq!(
        load_database_path(&settings),
        Some(PathBuf::from("/srv/media/catalog.db"))
    );

    save_database_path(&settings, None).unwrap();
    assert_eq!(load_database_path(&settings), None);
}

#[test]
fn test_save_preserves_other_keys() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(&settings, "[ui]\ncolor = false\n").unwrap();

    save_database_path(&settings, Some(Path::new("media.db"))).unwrap();

    let doc: toml::Value = std::fs::read_to_string(&settings)
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(doc["ui"]["color"].as_bool(), Some(false));
    assert_eq!(doc["database"]["path"].as_str(), Some("media.db"));
}

#[test]
fn test_unparsable_settings_are_replaced() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(&settings, "not = = toml").unwrap();

    save_database_path(&settings, Some(Path::new("media.db"))).unwrap();
    assert_eq!(load_database_path(&settings), Some(PathBuf::from("media.db")));
    assert!(!settings.with_extension("toml.tmp").exists());
}

#[test]
fn test_database_key_must_be_a_table() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(&settings, "database = \"media.db\"\n").unwrap();

    assert!(save_database_path(&settings, None).is_err());
    assert_eq!(
        std::fs::read_to_string(&settings).unwrap(),
        "database = \"media.db\"\n"
    );
}

#[test]
fn test_empty_path_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    std::fs::write(&settings, "[database]\npath = \"\"\n").unwrap();
    assert_eq!(load_database_path(&settings), None);
}

#[test]
fn test_cli_override_wins() {
    let p = PathBuf::from("/tmp/override.db");
    assert_eq!(resolve_database_path(Some(p.clone())), p);
}

#[test]
fn test_default_path_file_name() {
    assert!(default_database_path().ends_with(DEFAULT_DB_FILE));
}
