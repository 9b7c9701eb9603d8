use anyhow::Context;
use fm_core::{config::{self, Config}, logging};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path = PathBuf::from("fm-core.toml");
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() { eprintln!("--config requires a path"); std::process::exit(2); }
                config_path = PathBuf::from(&args[i]);
            }
            _ => {}
        }
        i += 1;
    }

    let shown = config::canonical_path(&config_path).unwrap_or_else(|_| config_path.clone());
    let cfg = Config::load(&config_path).with_context(|| format!("loading config {}", shown.display()))?;
    cfg.validate().context("validating config")?;

    for backend in cfg.resolve().context("resolving backends")? {
        info!(backend = %backend.name, root = %backend.root, capabilities = %backend.capabilities, source = ?backend.source, "backend ready");
        println!("{}", serde_json::to_string(&backend)?);
    }
    Ok(())
}
