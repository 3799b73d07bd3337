//! Tests for mode resolution and endpoint configuration

use serial_test::serial;

use credgate::config::{ENDPOINT_ENV, GlobalConfig, Mode};

#[test]
fn absent_endpoint_selects_demo_mode() {
    assert!(Mode::from_endpoint("").is_demo());
    assert!(Mode::from_endpoint("  \t").is_demo());
}

#[test]
fn configured_endpoint_selects_backend_mode() {
    let mode = Mode::from_endpoint(" http://localhost:8000/ ");
    assert_eq!(
        mode,
        Mode::Backend {
            endpoint: "http://localhost:8000".to_string()
        }
    );
}

#[test]
fn backend_urls_go_through_the_api_prefix() {
    let mode = Mode::from_endpoint("http://localhost:8000");
    assert_eq!(mode.api_url("/posts").unwrap(), "http://localhost:8000/api/posts");
    assert!(Mode::Demo.api_url("/posts").is_none());
}

#[test]
#[serial]
fn environment_overrides_the_config_file() {
    let config = GlobalConfig {
        endpoint: Some("http://from-file:8000".to_string()),
    };

    // set_var is unsafe in edition 2024; these tests run serialized
    unsafe { std::env::set_var(ENDPOINT_ENV, "http://from-env:9000") };
    let mode = Mode::resolve(&config);
    unsafe { std::env::remove_var(ENDPOINT_ENV) };

    assert_eq!(
        mode,
        Mode::Backend {
            endpoint: "http://from-env:9000".to_string()
        }
    );
}

#[test]
#[serial]
fn config_file_applies_without_an_override() {
    unsafe { std::env::remove_var(ENDPOINT_ENV) };
    let config = GlobalConfig {
        endpoint: Some("http://from-file:8000".to_string()),
    };
    assert_eq!(
        Mode::resolve(&config),
        Mode::Backend {
            endpoint: "http://from-file:8000".to_string()
        }
    );

    assert!(Mode::resolve(&GlobalConfig::default()).is_demo());
}

#[test]
fn config_round_trips_through_toml() {
    let config = GlobalConfig {
        endpoint: Some("http://localhost:8000".to_string()),
    };
    let encoded = toml::to_string(&config).unwrap();
    let decoded: GlobalConfig = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded.endpoint.as_deref(), Some("http://localhost:8000"));
}
