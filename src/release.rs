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

use serde::Deserialize;

use crate::version::Version;

/// A single entry in the release list, as GitHub returns it.
/// Only the fields that we process are listed. Serde ignores the rest.
#[derive(Debug, Deserialize)]
pub struct RawRelease {
    // GitHub reports `null` for releases created without a title.
    pub name: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
}

/// A published, final release of the tracked project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Release {
    /// The display name, such as `ICU 74.2`.
    pub name: String,
    /// The release notes, in Markdown. Used verbatim.
    pub body: String,
    pub version: Version,
}

impl RawRelease {
    /// Convert the raw entry into a release, or return `None` if the entry
    /// doesn't describe a final release of the project named by `prefix`.
    fn into_release(self, prefix: &str) -> Option<Release> {
        if self.prerelease {
            log::debug!("Skipping a pre-release: {:?}", self.name);
            return None;
        }

        let Some(name) = self.name else {
            log::debug!("Skipping a release without a name.");
            return None;
        };

        // The name has the form `<prefix> <version>`, with a single space.
        let Some(rest) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(' '))
        else {
            log::debug!("Skipping an unrelated release: {}", name);
            return None;
        };

        // Anything after the version is ignored.
        let Some(version) = rest.split(' ').next().and_then(Version::parse) else {
            log::debug!("Skipping a release without a recognizable version: {}", name);
            return None;
        };

        Some(Release {
            name,
            body: self.body.unwrap_or_default(),
            version,
        })
    }
}

/// Keep only those entries that are final releases of the project named by `prefix`,
/// in the order in which they arrived.
#[must_use]
pub fn releases_from_entries(entries: Vec<RawRelease>, prefix: &str) -> Vec<Release> {
    let total = entries.len();

    let releases: Vec<Release> = entries
        .into_iter()
        .filter_map(|entry| entry.into_release(prefix))
        .collect();

    log::info!(
        "Recognized {} out of {} entries as {} releases.",
        releases.len(),
        total,
        prefix
    );

    releases
}
