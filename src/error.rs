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

/// One of the two ends of the requested version range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let option = match self {
            Self::From => "from",
            Self::To => "to",
        };
        write!(f, "{option}")
    }
}

/// Problems with the range that the user requested on the command line.
///
/// Network and parsing failures aren't listed here. They travel as `eyre` reports
/// with context attached at the point where they happen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`--{0}=version` option is required")]
    MissingArgument(Endpoint),
    #[error("`--{endpoint}={value}` is not a valid version, expected MAJOR.MINOR")]
    InvalidVersionFormat { endpoint: Endpoint, value: String },
    #[error("`--from={from}` must be less than `--to={to}`")]
    InvertedRange { from: String, to: String },
    #[error("`--{endpoint}={value}` not found among the fetched releases")]
    EndpointNotFound { endpoint: Endpoint, value: String },
}
