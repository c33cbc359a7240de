use super::{BoxProfile, CliConfig};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;

impl CliConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check flag combinations and that the profile (if any) loads.
    ///
    /// Box settings themselves (style names, colors, padding) are checked by
    /// `TextBox::render`.
    pub fn validate(&self) -> Result<()> {
        let profile = self.load_profile()?;
        let wraps = self.wrap || profile.and_then(|profile| profile.wrap).unwrap_or(false);
        if self.wrap_limit.is_some() && !wraps {
            bail!("--wrap-limit requires --wrap (or `wrap: true` in the profile)");
        }
        Ok(())
    }

    /// Read and parse `--profile`, if one was given.
    pub fn load_profile(&self) -> Result<Option<BoxProfile>> {
        let Some(path) = &self.profile else {
            return Ok(None);
        };
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        let profile = BoxProfile::from_yaml(&source)
            .with_context(|| format!("invalid profile {}", path.display()))?;
        Ok(Some(profile))
    }
}
