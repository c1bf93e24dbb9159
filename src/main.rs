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

use std::process::ExitCode;

use color_eyre::eyre::Result;
use icu_relnotes::cli;

fn main() -> ExitCode {
    // Every failure ends up here. Report it on a single line, including its context.
    if let Err(error) = start() {
        eprintln!("{}", icu_relnotes::error_line(&error));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn start() -> Result<()> {
    // A request for the help or the version has already been answered.
    let Some(cli_arguments) = cli::get_args()? else {
        return Ok(());
    };

    icu_relnotes::run(&cli_arguments)
}
