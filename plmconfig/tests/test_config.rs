use plmconfig::Config;
use std::path::Path;
use tempfile::TempDir;

fn load_in_tempdir() -> (TempDir, Config) {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    (temp_dir, config)
}

#[test]
fn test_defaults_from_embedded_config() {
    let (_temp_dir, config) = load_in_tempdir();

    assert_eq!(config.get_max_upload_size().unwrap(), 16 * 1024 * 1024);
    assert_eq!(config.get_cover_max_size().unwrap(), 500);
    assert_eq!(
        config.get_allowed_extensions().unwrap(),
        vec!["mp3", "wav", "ogg", "m4a"]
    );
}

#[test]
fn test_config_file_is_written() {
    let (temp_dir, _config) = load_in_tempdir();
    assert!(temp_dir.path().join("config.yaml").exists());
}

#[test]
fn test_external_file_overrides_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.yaml"),
        "host:\n  http_port: 8123\nmedia:\n  allowed_extensions: [MP3, .flac]\n",
    )
    .unwrap();

    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.get_http_port(), 8123);
    assert_eq!(config.get_allowed_extensions().unwrap(), vec!["mp3", "flac"]);
    // Les clés absentes du fichier gardent leur valeur par défaut
    assert_eq!(config.get_cover_max_size().unwrap(), 500);
}

#[test]
fn test_managed_dirs_are_relative_to_config_dir() {
    let (temp_dir, config) = load_in_tempdir();

    let media = config.get_media_dir().unwrap();
    let covers = config.get_covers_dir().unwrap();

    assert!(Path::new(&media).starts_with(temp_dir.path()));
    assert!(Path::new(&media).is_dir());
    assert!(Path::new(&covers).is_dir());
}

#[test]
fn test_setters_persist() {
    let (temp_dir, config) = load_in_tempdir();
    config.set_http_port(9001).unwrap();
    config.set_cover_max_size(320).unwrap();

    let reloaded = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.get_http_port(), 9001);
    assert_eq!(reloaded.get_cover_max_size().unwrap(), 320);
}
