// src/pipeline/validate.rs

use std::path::Path;

use crate::config::load_all;
use crate::error::Result;

/// Validate configuration and catalog using load_all.
pub fn run_validate(config_path: &Path) -> Result<()> {
    log::info!("Validating {}...", config_path.display());

    match load_all(config_path) {
        Ok((config, catalog)) => {
            log::info!("✓ Config OK");
            log::info!("    Bind address: {}", config.server.bind_addr());
            log::info!("    News endpoint: {}", config.news.endpoint);
            log::info!(
                "    Refresh interval: {}s",
                config.news.refresh_interval_secs
            );
            log::info!(
                "    Cleaning rules: {} pattern(s), {} replacement(s)",
                config.cleaning.remove_patterns.len(),
                config.cleaning.replacements.len()
            );

            log::info!("✓ Catalog OK");
            log::info!("    Tools: {}", catalog.len());
            log::info!("    Categories: {}", catalog.categories().join(", "));
            Ok(())
        }
        Err(e) => {
            log::error!("Validation failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_malformed_config_fails_validation() {
        let file = write_temp("[news\nendpoint = \"http://127.0.0.1:3000/feed\"\n");
        assert!(run_validate(file.path()).is_err());
    }

    #[test]
    fn test_well_formed_config_passes() {
        let file = write_temp(
            "[news]\nendpoint = \"http://127.0.0.1:3000/feed\"\n\n[catalog]\npath = \"does/not/exist/tools.toml\"\n",
        );
        assert!(run_validate(file.path()).is_ok());
    }
}
