use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Generate a self-signed certificate for local HTTPS
#[derive(Parser)]
struct Cli {
    /// Directory for server.cert and server.key
    #[arg(long, default_value = "ssl")]
    out_dir: PathBuf,

    /// Subject alternative names
    #[arg(long = "name", default_values_t = ["localhost".to_string(), "127.0.0.1".to_string()])]
    names: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cert = rcgen::generate_simple_self_signed(cli.names.clone())
        .context("Failed to generate self-signed certificate")?;
    let cert_pem = cert
        .serialize_pem()
        .context("Failed to serialize certificate")?;
    let key_pem = cert.serialize_private_key_pem();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let cert_path = cli.out_dir.join("server.cert");
    let key_path = cli.out_dir.join("server.key");
    fs::write(&cert_path, cert_pem)
        .with_context(|| format!("Failed to write {}", cert_path.display()))?;
    fs::write(&key_path, key_pem)
        .with_context(|| format!("Failed to write {}", key_path.display()))?;

    println!("Certificate generated for {}", cli.names.join(", "));
    println!("Cert: {}", cert_path.display());
    println!("Key: {}", key_path.display());
    println!(
        "Serve HTTPS with TLS_CERT_PATH={} TLS_KEY_PATH={}",
        cert_path.display(),
        key_path.display()
    );

    Ok(())
}
