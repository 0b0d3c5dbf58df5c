use momentum_config::{apply_port_override, parse_settings, Settings};

#[test]
fn test_empty_file_gives_defaults() {
    let settings = parse_settings("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server.port, 3001);
    assert_eq!(settings.chart.default_days, 90);
    assert_eq!(settings.chart.lookback_days, 45);
    assert_eq!(settings.chart.anchor_years, 100);
    assert_eq!(settings.panel.algorithm_version, "v0.9.7");
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let text = r#"
        [server]
        port = 8080

        [panel]
        cache_capacity = 50
    "#;
    let settings = parse_settings(text).unwrap();
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.panel.cache_capacity, 50);
    assert_eq!(settings.panel.cache_ttl_secs, 3600);
    assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn test_bad_toml_is_an_error() {
    assert!(parse_settings("[server]\nport = \"many\"").is_err());
}

#[test]
fn test_port_override() {
    let mut settings = Settings::default();
    apply_port_override(&mut settings, Some("4000")).unwrap();
    assert_eq!(settings.server.port, 4000);
    apply_port_override(&mut settings, None).unwrap();
    assert_eq!(settings.server.port, 4000);
    assert!(apply_port_override(&mut settings, Some("abc")).is_err());
}
