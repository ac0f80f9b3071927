//! Server TLS setup

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

/// Install the `ring` crypto provider for the process
///
/// The dependency graph enables more than one rustls backend, so rustls
/// cannot pick a default on its own. Calling this again is a no-op.
pub fn install_crypto_provider() {
    // Err only means a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Load a PEM certificate chain and private key for `bind_rustls`
pub async fn load_rustls_config(cert: &Path, key: &Path) -> std::io::Result<RustlsConfig> {
    install_crypto_provider();
    RustlsConfig::from_pem_file(cert, key).await
}
