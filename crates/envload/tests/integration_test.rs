//! Integration tests for the public loading API.
//!
//! These tests load real files through `load_env` / `load_env_into` and
//! check the exact variables that end up in the target environment.

use std::path::{Path, PathBuf};

use envload::{EnvLoader, FileFormat, LoadError, MemoryEnv, TargetEnv, load_env, load_env_into};
use serial_test::serial;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("envload=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_env_local_fixture() {
    init_tracing();
    let dir = fixtures_dir();
    let mut env = MemoryEnv::new();

    assert!(load_env_into(&mut env, ".env.local", Some(dir.as_path())));

    assert_eq!(env.get("VAR_0").as_deref(), Some("123.5"));
    assert_eq!(env.get("VAR_1").as_deref(), Some("string"));
    assert_eq!(env.get("VAR_2").as_deref(), Some(r#"[\"hello#world\"]"#));
}

#[test]
fn test_env_json_fixture() {
    init_tracing();
    let dir = fixtures_dir();
    let mut env = MemoryEnv::new();

    assert!(load_env_into(&mut env, ".env.json", Some(dir.as_path())));

    assert_eq!(env.get("APP_NAME").as_deref(), Some("test-app"));
    assert_eq!(env.get("DEBUG").as_deref(), Some("True"));
    assert_eq!(env.get("PORT").as_deref(), Some("8080"));
    assert_eq!(
        env.get("ALLOWED_HOSTS").as_deref(),
        Some(r#"["localhost", "127.0.0.1"]"#)
    );
    assert_eq!(
        env.get("DATABASE").as_deref(),
        Some(r#"{"host": "localhost", "port": 5432, "user": "admin"}"#)
    );
}

#[test]
fn test_report_describes_load() {
    let report = EnvLoader::new()
        .with_search_dir(fixtures_dir())
        .load_into(".env.json", &mut MemoryEnv::new())
        .expect("fixture should load");

    assert_eq!(report.format, FileFormat::Json);
    assert_eq!(report.path, fixtures_dir().join(".env.json"));
    assert_eq!(
        report.applied,
        vec!["APP_NAME", "DEBUG", "PORT", "ALLOWED_HOSTS", "DATABASE"]
    );
    assert!(report.is_clean());
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let mut env = MemoryEnv::new();

    assert!(!load_env_into(&mut env, "nonexistent.env", Some(temp_dir.path())));
    assert!(env.is_empty());

    let err = EnvLoader::new()
        .with_search_dir(temp_dir.path())
        .load_into("nonexistent.env", &mut env)
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
}

#[test]
#[serial]
fn test_load_env_into_process_environment() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("app.env"),
        "_ENVLOAD_IT_NAME=demo\n_ENVLOAD_IT_URL=http://$_ENVLOAD_IT_NAME.local\n123BAD=x\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("_ENVLOAD_IT_NAME", None::<&str>),
            ("_ENVLOAD_IT_URL", Some("stale")),
        ],
        || {
            assert!(load_env("app.env", Some(temp_dir.path())));
            assert_eq!(std::env::var("_ENVLOAD_IT_NAME").as_deref(), Ok("demo"));
            assert_eq!(
                std::env::var("_ENVLOAD_IT_URL").as_deref(),
                Ok("http://demo.local")
            );
            assert!(std::env::var("123BAD").is_err());
        },
    );
}

#[test]
#[serial]
fn test_failed_json_load_leaves_process_environment_untouched() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("bad.json"), r#"{"_ENVLOAD_IT_BAD": 1,"#).unwrap();

    temp_env::with_vars([("_ENVLOAD_IT_BAD", None::<&str>)], || {
        assert!(!load_env("bad.json", Some(temp_dir.path())));
        assert!(std::env::var("_ENVLOAD_IT_BAD").is_err());
    });
}
