//! Tests for layered `.env` configuration loading.

use std::fs;
use std::path::PathBuf;

use adboard_seeder::config::ConfigLoader;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "adboard-seeder-config-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("creating scratch dir");
    dir
}

#[test]
fn loads_defaults_from_an_empty_directory() {
    let dir = scratch_dir("defaults");
    let config = ConfigLoader::with_base_dir(dir.clone()).load().unwrap();

    assert_eq!(config.profile, "local");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, "json");
    assert_eq!(config.db_max_connections, 10);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn env_local_overrides_env() {
    let dir = scratch_dir("layering");
    fs::write(
        dir.join(".env"),
        "ADBOARD_DATABASE_URL=sqlite::memory:\nADBOARD_DB_MAX_CONNECTIONS=3\n",
    )
    .unwrap();
    fs::write(dir.join(".env.local"), "ADBOARD_DB_MAX_CONNECTIONS=7\n").unwrap();

    let config = ConfigLoader::with_base_dir(dir.clone()).load().unwrap();
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.db_max_connections, 7);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn profile_selects_its_own_env_layer() {
    let dir = scratch_dir("profile");
    fs::write(dir.join(".env"), "ADBOARD_PROFILE=staging\n").unwrap();
    fs::write(dir.join(".env.staging"), "ADBOARD_LOG_FORMAT=plain\n").unwrap();

    let config = ConfigLoader::with_base_dir(dir.clone()).load().unwrap();
    assert_eq!(config.profile, "staging");
    assert_eq!(config.log_format, "plain");

    let _ = fs::remove_dir_all(dir);
}
