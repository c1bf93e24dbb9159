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

use std::path::PathBuf;

use bpaf::{Args, Bpaf, ParseFailure};
use color_eyre::eyre::{eyre, Result};

/// The width of the help text, in characters.
const HELP_WIDTH: usize = 100;

/// Parse the command-line arguments of the tool.
///
/// Returns `None` if the user only asked for the help or the version, which are already printed.
/// Invalid arguments become an error, so that they're reported like any other failure.
pub fn get_args() -> Result<Option<Cli>> {
    arguments(Args::current_args())
}

fn arguments<'a>(args: impl Into<Args<'a>>) -> Result<Option<Cli>> {
    match cli().run_inner(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(ParseFailure::Stderr(message)) => {
            // Keep the message on a single line, like the rest of the errors.
            let text = message.monochrome(true);
            let line: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();
            Err(eyre!(line.join(" ")))
        }
        Err(other) => {
            other.print_mesage(HELP_WIDTH);
            Ok(None)
        }
    }
}

/// Collect the release notes of a version range into a single Markdown document.
#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version)]
pub struct Cli {
    /// Display more detailed progress messages.
    #[bpaf(short, long, req_flag(()), count)]
    pub verbose: usize,

    // The range ends are optional for the parser so that
    // a missing one is reported in the same way as the other usage errors.
    /// The first release in the range, such as 73.1.
    #[bpaf(long, argument("VERSION"))]
    pub from: Option<String>,

    /// The last release in the range, such as 74.2.
    #[bpaf(long, argument("VERSION"))]
    pub to: Option<String>,

    /// A YAML file with settings. Command-line options take precedence.
    #[bpaf(short, long, argument("FILE"))]
    pub config: Option<PathBuf>,

    /// The GitHub repository that publishes the releases. The default is unicode-org/icu.
    #[bpaf(long, argument("OWNER/NAME"))]
    pub repository: Option<String>,

    /// The first word of every release name. The default is ICU.
    #[bpaf(long, argument("PREFIX"))]
    pub prefix: Option<String>,

    /// The base address of the GitHub API.
    #[bpaf(long, argument("URL"))]
    pub api_url: Option<String>,

    /// The maximum time to wait for the release list, in seconds.
    #[bpaf(long, argument("SECONDS"))]
    pub timeout: Option<u64>,

    /// Save the document to this file instead of printing it.
    #[bpaf(short, long, argument("FILE"))]
    pub output: Option<PathBuf>,
}
