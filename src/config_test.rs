use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let config = HostConfig::from_values(None, None).unwrap();
    assert_eq!(config.bind, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn explicit_values_are_used() {
    let config = HostConfig::from_values(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn empty_port_falls_back_to_default() {
    let config = HostConfig::from_values(None, Some("  ")).unwrap();
    assert_eq!(config.bind.port(), DEFAULT_PORT);
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let config = HostConfig::from_values(Some("::1"), Some("3000")).unwrap();
    assert!(config.bind.is_ipv6());
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        HostConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        HostConfig::from_values(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn invalid_bind_addr_is_rejected() {
    assert_eq!(
        HostConfig::from_values(Some("localhost"), None),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: \"x\"");
    assert_eq!(
        ConfigError::InvalidBindAddr("y".into()).to_string(),
        "invalid BIND_ADDR: \"y\""
    );
}
