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

// Enable additional clippy lints by default.
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::todo
)]
// Forbid unsafe code in this program.
#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Report, Result, WrapErr};

pub mod cli;
mod config;
mod error;
mod github;
mod logging;
mod range;
mod release;
mod templating;
mod version;

use cli::Cli;
use config::Settings;

pub use crate::error::{Endpoint, Error};
pub use crate::release::Release;
pub use crate::version::Version;

/// Generate the release notes document for the range that the user picked on the command line
/// and print it, or save it to the output file.
pub fn run(cli: &Cli) -> Result<()> {
    // Initialize the logging system based on the set verbosity
    logging::initialize_logger(cli.verbose)?;

    let document = generate(cli)?;

    write_document(&document, cli.output.as_deref())
}

/// Download the releases and format the notes of the requested range as a Markdown document.
///
/// The range is validated before any network access. Usage errors carry an [`Error`],
/// which the caller can recover with `downcast_ref`.
pub fn generate(cli: &Cli) -> Result<String> {
    let range = RequestedRange::new(cli.from.as_deref(), cli.to.as_deref())?;
    let settings = Settings::new(cli)?;

    let releases = github::fetch_releases(&settings)?;
    let selected = range::select_range(releases, range.from, range.to)
        .map_err(|endpoint| range.not_found(endpoint))?;

    log::info!("Formatting the document from {} releases.", selected.len());
    templating::render(&selected)
}

/// Format an error as the single line that the user sees, including its context.
///
/// Some libraries repeat the message of the underlying error in their own message.
/// Such repeated causes are left out.
#[must_use]
pub fn error_line(error: &Report) -> String {
    let mut parts: Vec<String> = Vec::new();

    for cause in error.chain() {
        let message = cause.to_string();
        let message = message.lines().map(str::trim).collect::<Vec<_>>().join(" ");

        if parts.last().map_or(false, |last| last.ends_with(&message)) {
            continue;
        }
        parts.push(message);
    }

    format!("ERROR: {}", parts.join(": "))
}

/// The validated ends of the version range from the command line,
/// along with the arguments as the user wrote them.
#[derive(Debug, PartialEq, Eq)]
struct RequestedRange<'a> {
    from: Version,
    to: Version,
    from_arg: &'a str,
    to_arg: &'a str,
}

impl<'a> RequestedRange<'a> {
    fn new(from: Option<&'a str>, to: Option<&'a str>) -> Result<Self, Error> {
        let from_arg = from.ok_or(Error::MissingArgument(Endpoint::From))?;
        let to_arg = to.ok_or(Error::MissingArgument(Endpoint::To))?;

        let from = parse_endpoint(Endpoint::From, from_arg)?;
        let to = parse_endpoint(Endpoint::To, to_arg)?;

        if from >= to {
            return Err(Error::InvertedRange {
                from: from_arg.to_string(),
                to: to_arg.to_string(),
            });
        }

        Ok(Self {
            from,
            to,
            from_arg,
            to_arg,
        })
    }

    /// The error for an end of the range that no release matches.
    fn not_found(&self, endpoint: Endpoint) -> Error {
        let value = match endpoint {
            Endpoint::From => self.from_arg,
            Endpoint::To => self.to_arg,
        };

        Error::EndpointNotFound {
            endpoint,
            value: value.to_string(),
        }
    }
}

/// A version from the command line must be valid, unlike versions in the release list.
fn parse_endpoint(endpoint: Endpoint, value: &str) -> Result<Version, Error> {
    Version::parse(value).ok_or_else(|| Error::InvalidVersionFormat {
        endpoint,
        value: value.to_string(),
    })
}

/// Print the document to the standard output, or save it to a file if the user picked one.
fn write_document(document: &str, output: Option<&Path>) -> Result<()> {
    if let Some(out_file) = output {
        log::info!("Saving the release notes to {}", out_file.display());
        fs::write(out_file, document).wrap_err("Failed to write the release notes document")?;
    } else {
        println!("{document}");
    }

    Ok(())
}
