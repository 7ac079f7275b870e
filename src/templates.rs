//! Renderer for the SearxNG provisioning script.
//!
//! Pure string building only. File emission lives in `generate`.

/// Working directory the provisioned host keeps the compose bundle in.
pub const SEARXNG_DIR: &str = "/opt/searxng";

/// Container image the generated compose file pins.
pub const SEARXNG_IMAGE: &str = "searxng/searxng:latest";

/// docker-compose release the generated script downloads.
pub const DOCKER_COMPOSE_VERSION: &str = "v2.24.5";

/// Registrable part of `domain`: everything after the first label when the
/// name has more than one dot, otherwise the name unchanged.
///
/// Not embedded in the generated script; kept for callers that want to group
/// hosts by parent zone.
pub fn base_domain(domain: &str) -> &str {
    if domain.matches('.').count() > 1 {
        match domain.split_once('.') {
            Some((_, rest)) => rest,
            None => domain,
        }
    } else {
        domain
    }
}

/// Render the full provisioning script.
///
/// Deterministic and side-effect free: the same inputs always yield the same
/// bytes. Values are substituted verbatim with no escaping; the only input
/// check is the FQDN guard the script itself runs against the domain.
///
/// `_admin_password` is accepted for signature uniformity with sibling
/// generators but SearxNG needs no admin credential, so it never reaches the
/// output.
///
/// The compose port mapping stays `8080:8080` no matter what `port` is; the
/// container always listens on 8080 internally. `port` only sets the nginx
/// upstream target.
pub fn setup_script(domain: &str, admin_email: &str, _admin_password: &str, port: u16) -> String {
    format!(
        r#"#!/bin/bash

set -e

# Validate DOMAIN_NAME is a proper FQDN
if [[ ! "{domain}" =~ ^[a-zA-Z0-9.-]+\.[a-zA-Z]{{2,}}$ ]]; then
    echo "ERROR: {domain} is not a valid FQDN (e.g., {domain})"
    exit 1
fi

DOMAIN_NAME="{domain}"
ADMIN_EMAIL="{email}"
SEARXNG_DIR="{dir}"

echo "Updating system and installing dependencies..."
apt-get update
DEBIAN_FRONTEND=noninteractive apt-get install -y curl docker.io ufw nginx certbot python3-certbot-nginx

echo "Installing docker-compose..."
DOCKER_COMPOSE_VERSION="{compose_version}"
curl -SL https://github.com/docker/compose/releases/download/$DOCKER_COMPOSE_VERSION/docker-compose-linux-x86_64 -o /usr/local/bin/docker-compose
chmod +x /usr/local/bin/docker-compose
ln -sf /usr/local/bin/docker-compose /usr/bin/docker-compose

echo "Enabling and starting Docker and Nginx services..."
systemctl enable docker
systemctl start docker
systemctl enable nginx
systemctl start nginx

echo "Creating SearxNG directory..."
mkdir -p "$SEARXNG_DIR"
cd "$SEARXNG_DIR" || exit 1

echo "Creating Docker Compose file for SearxNG..."
cat > docker-compose.yml <<EOF
version: "3"

services:
  searxng:
    image: {image}
    container_name: searxng
    restart: unless-stopped
    ports:
      - "8080:8080"
    volumes:
      - ./settings.yml:/etc/searxng/settings.yml:ro
EOF

echo "Creating minimal settings.yml..."
cat > settings.yml <<'EOF'
server:
  base_url: https://{domain}

# Add additional settings or customize as needed
EOF

echo "Starting SearxNG container..."
docker-compose up -d

echo "Allowing HTTP, HTTPS, and SSH through UFW..."
ufw allow 22/tcp
ufw allow 80/tcp
ufw allow 443/tcp

ufw status | grep -qw inactive && echo "Enabling UFW firewall..." && ufw --force enable
ufw reload || true

echo "Configuring Nginx reverse proxy for SearxNG..."

NGINX_CONF="/etc/nginx/sites-available/searxng"
cat > "$NGINX_CONF" <<EOF
server {{
    listen 80;
    server_name {domain};

    location /.well-known/acme-challenge/ {{
        root /var/www/certbot;
    }}

    location / {{
        proxy_pass http://localhost:{port}/;
        proxy_set_header Host \$host;
        proxy_set_header X-Real-IP \$remote_addr;
        proxy_set_header X-Forwarded-For \$proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto \$scheme;
    }}
}}
EOF

mkdir -p /var/www/certbot
ln -sf "$NGINX_CONF" /etc/nginx/sites-enabled/searxng

echo "Testing Nginx configuration..."
nginx -t

echo "Reloading Nginx..."
systemctl reload nginx

echo "Obtaining Let's Encrypt SSL certificate for {domain}..."
certbot --nginx -d {domain} --non-interactive --agree-tos --email {email} --redirect

echo "Reloading Nginx to apply SSL configuration..."
systemctl reload nginx

echo "SearxNG setup completed successfully!"

echo ""
echo "IMPORTANT DNS Records to configure for {domain}:"
echo "A Record: {domain} -> Your Server IP"
echo ""
echo "Access SearxNG at: https://{domain}/"
echo ""
echo "Please customize your SearxNG settings in {dir}/settings.yml as needed."
"#,
        domain = domain,
        email = admin_email,
        port = port,
        dir = SEARXNG_DIR,
        image = SEARXNG_IMAGE,
        compose_version = DOCKER_COMPOSE_VERSION,
    )
}
