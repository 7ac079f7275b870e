use std::path::PathBuf;

use searxng_provision::config::{self, AppConfig};

#[test]
fn config_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    let path = config::resolve_config_path().expect("resolve config path");

    let mut cfg = AppConfig::default();
    cfg.last_script_path = Some(PathBuf::from("/tmp/setup-searxng.sh"));
    cfg.last_domain = Some("search.example.org".to_string());
    cfg.last_port = Some(8080);

    config::save(&path, &cfg).expect("save");
    let loaded = config::load().expect("load");

    assert_eq!(loaded.last_script_path, cfg.last_script_path);
    assert_eq!(loaded.last_domain, cfg.last_domain);
    assert_eq!(loaded.last_port, cfg.last_port);
}
