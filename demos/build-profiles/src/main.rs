//! Demo: kernel build profiles kept in a JSON file.
//!
//! Each run prints the profiles, advances `current` to the next one and saves
//! the file. Usage: `build-profiles [PATH]` (defaults to
//! `build-profiles.json` in the current directory).

use std::fmt::{self, Display, Formatter};

use anyhow::{Context, Result};
use jconfig::{JConfig, ZeroInit};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONTENT: &str = r#"{
	"editor": "vim",
	"current": 0,
	"profile": [
	{
		"name":"first",
		"src_dir":"/home/user/kernel",
		"arch":"arm",
		"cross_compile":"arm-eabi-",
		"target":"uImage",
		"output_dir":"./arm_build"
	},
	{
		"name":"second",
		"src_dir":"/home/user/kernel",
		"arch":"x86",
		"target":"zImage",
		"output_dir":"./x86_build"
	}
	]
}
"#;

/// One way of building a kernel tree.
#[derive(Debug, Serialize, Deserialize, ZeroInit)]
#[serde(default)]
struct Profile {
    name: String,
    src_dir: String,
    arch: String,
    target: String,
    cross_compile: String,
    output_dir: String,
}

#[derive(Debug, Serialize, Deserialize, ZeroInit)]
#[serde(default)]
struct BuildConfig {
    editor: String,
    current: usize,
    #[serde(rename = "profile")]
    profiles: Vec<Profile>,
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]: use '{}' to build '{}' on '{}' from '{}' to '{}'",
            self.name, self.cross_compile, self.target, self.arch, self.src_dir, self.output_dir
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "build-profiles.json".to_owned());
    let mut config = JConfig::<BuildConfig>::new(&path);
    let file_path = config.file_path();

    let data = config
        .load(DEFAULT_CONTENT)
        .with_context(|| format!("loading {}", file_path.display()))?;

    println!("editor: {}, current profile: {}", data.editor, data.current);
    for (index, profile) in data.profiles.iter().enumerate() {
        let marker = if index == data.current { '*' } else { ' ' };
        println!("{marker} {profile}");
    }

    if data.profiles.is_empty() {
        warn!(path = %file_path.display(), "no build profiles configured");
        return Ok(());
    }

    data.current = (data.current + 1) % data.profiles.len();
    let next = data.current;
    config
        .save()
        .with_context(|| format!("saving {}", file_path.display()))?;
    info!(current = next, "advanced to next profile");
    Ok(())
}
