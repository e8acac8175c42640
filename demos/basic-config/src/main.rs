//! Minimal demo: load (or create) a server config and print it.
//!
//! Usage: `basic-config [PATH]` (defaults to `config.json` in the current
//! directory).

use anyhow::{Context, Result};
use jconfig::{JConfig, ZeroInit};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONTENT: &str = r#"{
	"server": "127.0.0.1:8088"
}
"#;

#[derive(Debug, Serialize, Deserialize, ZeroInit)]
#[serde(default)]
struct Config {
    server: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_owned());
    let mut config = JConfig::<Config>::new(&path);
    let file_path = config.file_path();

    let data = config
        .load(DEFAULT_CONTENT)
        .with_context(|| format!("loading {}", file_path.display()))?;
    info!(server = %data.server, "config ready");

    println!("{}: server = {}", file_path.display(), data.server);
    Ok(())
}
