use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_base_url: "/api".to_owned() });
}

#[test]
fn overrides_are_read_and_base_url_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("ADMIN_API_BASE_URL", "https://api.example.test/v1/")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.example.test/v1");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup(&[("ADMIN_API_BASE_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_base_url, "/api");
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some(" ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { value: "70000".to_owned() }));
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: http");
}
