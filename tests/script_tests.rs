use searxng_provision::templates::{self, base_domain, setup_script};

fn sample() -> String {
    setup_script("example.com", "admin@example.com", "x", 8080)
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(sample(), sample());
}

#[test]
fn script_starts_with_shebang_and_exit_on_error() {
    let script = sample();
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("\nset -e\n"));
}

#[test]
fn substitutes_all_parameters() {
    let script = sample();
    assert!(script.contains(r#"DOMAIN_NAME="example.com""#));
    assert!(script.contains(r#"ADMIN_EMAIL="admin@example.com""#));
    assert!(script.contains("proxy_pass http://localhost:8080/"));
    assert!(script.contains("base_url: https://example.com"));
    assert!(script.contains("server_name example.com;"));
}

#[test]
fn keeps_fqdn_guard_on_domain() {
    let script = sample();
    assert!(script.contains(r#"if [[ ! "example.com" =~ ^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$ ]]; then"#));
    assert!(script.contains("ERROR: example.com is not a valid FQDN"));
}

#[test]
fn preserves_shell_and_nginx_syntax() {
    let script = sample();
    assert!(script.contains("$host"));
    assert!(script.contains("$remote_addr"));
    assert!(script.contains("$scheme"));
    // nginx variables stay escaped inside the unquoted heredoc
    assert!(script.contains(r"proxy_set_header Host \$host;"));
    assert!(script.contains(r"proxy_set_header X-Forwarded-For \$proxy_add_x_forwarded_for;"));
    assert!(script.contains("server {\n"));
    assert!(script.contains("location /.well-known/acme-challenge/ {"));
}

#[test]
fn pins_tooling_and_paths() {
    let script = sample();
    assert!(script.contains(r#"DOCKER_COMPOSE_VERSION="v2.24.5""#));
    assert!(script.contains(r#"SEARXNG_DIR="/opt/searxng""#));
    assert!(script.contains("image: searxng/searxng:latest"));
    assert!(script.contains("/etc/nginx/sites-available/searxng"));
    assert!(script.contains("/etc/nginx/sites-enabled/searxng"));
    assert!(script.contains("root /var/www/certbot;"));
    assert!(script.contains("certbot --nginx -d example.com --non-interactive --agree-tos --email admin@example.com --redirect"));
}

#[test]
fn admin_password_never_reaches_output() {
    let a = setup_script("example.com", "admin@example.com", "hunter2", 8080);
    let b = setup_script("example.com", "admin@example.com", "swordfish", 8080);
    assert_eq!(a, b);
    assert!(!a.contains("hunter2"));
}

#[test]
fn port_only_moves_the_proxy_target() {
    let script = setup_script("example.com", "admin@example.com", "x", 3000);
    assert!(script.contains("proxy_pass http://localhost:3000/"));
    // compose mapping is fixed; the container always listens on 8080
    assert!(script.contains(r#"- "8080:8080""#));
    assert!(!script.contains("proxy_pass http://localhost:8080/"));
}

#[test]
fn base_domain_strips_one_label_past_two_dots() {
    assert_eq!(base_domain("sub.example.com"), "example.com");
    assert_eq!(base_domain("a.b.c.d"), "b.c.d");
    assert_eq!(base_domain("example.com"), "example.com");
    assert_eq!(base_domain("localhost"), "localhost");
}

#[test]
fn base_domain_does_not_leak_into_output() {
    let script = setup_script("sub.example.net", "admin@sub.example.net", "x", 8080);
    assert_eq!(base_domain("sub.example.net"), "example.net");

    // every example.net in the script must come from the full domain
    let stripped = script.replace("sub.example.net", "");
    assert!(!stripped.contains("example.net"));
}

#[test]
fn constants_match_the_emitted_script() {
    let script = sample();
    assert!(script.contains(templates::SEARXNG_DIR));
    assert!(script.contains(templates::SEARXNG_IMAGE));
    assert!(script.contains(templates::DOCKER_COMPOSE_VERSION));
}
