use anyhow::{bail, Result};

use pagedeck_core::AppConfig;

/// Write the default configuration file, refusing to clobber an existing one
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        bail!("Configuration already exists at {}", path.display());
    }

    AppConfig::default().save()?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Print the configuration file location
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
