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

use askama::Template;
use color_eyre::eyre::{Result, WrapErr};

use crate::release::Release;

/// The Markdown document with one section per release.
#[derive(Template)] // this will generate the code...
#[template(path = "release-notes.md", escape = "none")] // using the template in this path, relative
                                                        // to the `templates` dir in the crate root
struct ReleaseNotes<'a> {
    releases: &'a [Release],
}

/// Concatenate the release notes into a single Markdown document.
/// Each release becomes a top-level heading with its name, followed by its body as is.
pub fn render(releases: &[Release]) -> Result<String> {
    let document = ReleaseNotes { releases };

    document
        .render()
        .wrap_err("Failed to format the release notes document")
}
