/*
icu-relnotes: Collect the release notes of an ICU version range into a single Markdown document.
Copyright (C) 2024  Marek Suchánek  <msuchane@redhat.com>

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::fs;
use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::{bail, Result, WrapErr};
use serde::Deserialize;

use crate::cli::Cli;

/// The GitHub repository that publishes ICU releases.
const DEFAULT_REPOSITORY: &str = "unicode-org/icu";
/// Release names start with this word, followed by the version.
const DEFAULT_PREFIX: &str = "ICU";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to look for releases.
///
/// Every field is optional in the configuration file. Missing fields use the defaults,
/// which describe the ICU project on GitHub.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The repository in the `owner/name` form.
    pub repository: String,
    pub prefix: String,
    pub api_url: String,
    /// The maximum time for the whole request, in seconds.
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load the settings from the optional configuration file,
    /// and then apply the overrides from the command line.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(repository) = &cli.repository {
            settings.repository = repository.clone();
        }
        if let Some(prefix) = &cli.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(api_url) = &cli.api_url {
            settings.api_url = api_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            settings.timeout = timeout;
        }

        settings.validate()?;
        log::debug!("{:#?}", settings);

        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Cannot read the configuration file: {}", path.display()))?;
        let settings: Self = serde_yaml::from_str(&text)
            .wrap_err_with(|| format!("Cannot parse the configuration file: {}", path.display()))?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let mut parts = self.repository.split('/');
        let valid_repository = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !valid_repository {
            bail!(
                "The repository `{}` is not in the `owner/name` form",
                self.repository
            );
        }

        if self.prefix.trim().is_empty() {
            bail!("The release name prefix must not be empty");
        }

        // A zero timeout would abort every request right away.
        if self.timeout == 0 {
            bail!("The timeout must be at least 1 second");
        }

        Ok(())
    }

    /// The address of the release list, without the query string.
    #[must_use]
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/releases",
            self.api_url.trim_end_matches('/'),
            self.repository
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
