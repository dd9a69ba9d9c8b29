use licensor_core::AdminSecret;
use licensor_service::{LicenseService, ServiceConfig, DEFAULT_DATABASE_PATH};
use tempfile::TempDir;

#[test]
fn default_config_uses_documented_values() {
    let config = ServiceConfig::default();
    assert!(config.admin_secret.is_default());
    assert_eq!(config.database_path.to_str(), Some(DEFAULT_DATABASE_PATH));
    assert!(!config.debug);
}

#[test]
fn open_uses_configured_path_and_secret() {
    let dir = TempDir::new().unwrap();
    let config = ServiceConfig {
        admin_secret: AdminSecret::new("from-config"),
        database_path: dir.path().join("svc.db"),
        debug: true,
    };
    let svc = LicenseService::open(&config).unwrap();
    assert!(svc.authenticate("from-config"));
    assert!(!svc.authenticate("admin123"));
    assert!(config.database_path.exists());
}

#[test]
fn open_fails_for_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let config = ServiceConfig {
        database_path: dir.path().join("missing-dir").join("svc.db"),
        ..ServiceConfig::default()
    };
    let err = LicenseService::open(&config).unwrap_err();
    assert_eq!(err.kind(), licensor_service::ErrorKind::Server);
}
