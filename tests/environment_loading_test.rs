//! Loader behavior through the public API.

use coffee_env::{ClientEnvironmentConfig, ConfigError, ConfigLoader, Profile};
use url::Url;

mod common;

#[test]
fn test_development_environment_is_usable() {
    let root = common::temp_project();
    let env = common::without_overrides(|| {
        ConfigLoader::load_from_dir(root.path(), Profile::Development).unwrap()
    });

    assert!(!env.production);
    assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
    assert_eq!(env.auth0.client_id, "lJ0mOD58ItQm2QmdwhCF6hIBFzQkkSv1");
    assert!(Url::parse(&env.api_server_url).is_ok());
    assert!(Url::parse(&env.auth0.callback_url).is_ok());
}

#[test]
fn test_loading_twice_yields_identical_values() {
    let root = common::temp_project();
    let (first, second) = common::without_overrides(|| {
        (
            ConfigLoader::load_from_dir(root.path(), Profile::Development).unwrap(),
            ConfigLoader::load_from_dir(root.path(), Profile::Development).unwrap(),
        )
    });
    assert_eq!(first, second);
    assert_eq!(&first, ClientEnvironmentConfig::development());
}

#[test]
fn test_production_deployment_from_files() {
    let root = common::temp_project();
    common::write_override(
        root.path(),
        "environment.production.yaml",
        "api_server_url: https://api.coffee.example\nauth0:\n  callback_url: https://coffee.example\n",
    );

    let env = common::without_overrides(|| {
        ConfigLoader::load_from_dir(root.path(), Profile::Production).unwrap()
    });

    assert!(env.production);
    assert_eq!(env.api_server_url, "https://api.coffee.example");
    assert_eq!(env.auth0.audience, "coffee");
}

#[test]
fn test_production_override_pointing_at_localhost_is_rejected() {
    let root = common::temp_project();
    common::write_override(
        root.path(),
        "environment.production.yaml",
        "api_server_url: https://api.coffee.example\nauth0:\n  callback_url: http://localhost:8100\n",
    );

    let err = common::without_overrides(|| {
        ConfigLoader::load_from_dir(root.path(), Profile::Production).unwrap_err()
    });
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::LoopbackInProduction { field: "auth0.callback_url", .. })
    ));
}

#[test]
fn test_shared_file_cannot_flip_production_flag() {
    let root = common::temp_project();
    common::write_override(root.path(), "environment.yaml", "production: true\n");

    let err = common::without_overrides(|| {
        ConfigLoader::load_from_dir(root.path(), Profile::Development).unwrap_err()
    });
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ProductionFlagMismatch { production: true, .. })
    ));
}
