use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_zero_garbage_and_overflow() {
    for raw in ["0", "http", "70000", "-1"] {
        assert_eq!(
            parse_port(Some(raw)),
            Err(ConfigError::InvalidPort { value: raw.to_owned() }),
            "expected rejection for {raw:?}"
        );
    }
}

// =============================================================================
// HostConfig
// =============================================================================

#[test]
fn config_uses_defaults_for_empty_environment() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HostConfig { port: DEFAULT_PORT, site_root: None });
    assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn config_reads_port_and_site_root() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "4100"), ("SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn config_ignores_blank_site_root() {
    let config = HostConfig::from_lookup(lookup(&[("SITE_ROOT", "   ")])).unwrap();
    assert_eq!(config.site_root, None);
}

#[test]
fn config_surfaces_invalid_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "abc")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT \"abc\": expected 1-65535");
}
