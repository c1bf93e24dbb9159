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

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

const REGEX_ERROR: &str = "Invalid built-in regular expression.";

/// A version consists of exactly two dot-separated numbers, such as `74.2`.
static VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)$").expect(REGEX_ERROR));

/// A two-component project version.
///
/// The derived ordering compares `major` first and `minor` second,
/// both numerically, so `10.0` sorts after `9.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
}

impl Version {
    /// Parse a `MAJOR.MINOR` string. Returns `None` if the string doesn't have
    /// exactly that shape, or if a component doesn't fit into `u64`.
    ///
    /// A missing version isn't an error at this level. Release entries with a malformed
    /// version are silently skipped, while a malformed command-line version is fatal.
    #[must_use]
    pub fn parse(candidate: &str) -> Option<Self> {
        let captures = VERSION_REGEX.captures(candidate)?;

        // The regex `\d` class also matches non-ASCII digits, which `u64` rejects.
        let major = captures[1].parse().ok()?;
        let minor = captures[2].parse().ok()?;

        Some(Self { major, minor })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
