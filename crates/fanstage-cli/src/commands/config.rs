//! Config command - show where configuration lives and what is in effect

use std::path::Path;

use anyhow::Result;
use fanstage_config::Config;

pub fn handle(path: Option<&Path>, config: &Config) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);

    println!("Config file: {}", path.display());
    println!();
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
