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

use crate::error::Endpoint;
use crate::release::Release;
use crate::version::Version;

/// Sort the releases by version and select the inclusive range between `from` and `to`.
///
/// Both versions must belong to an existing release. Otherwise, the error names the end
/// of the range that wasn't found. The caller makes sure that `from` is lower than `to`.
pub fn select_range(
    mut releases: Vec<Release>,
    from: Version,
    to: Version,
) -> Result<Vec<Release>, Endpoint> {
    // A stable sort, so that duplicate versions keep their order from the API.
    releases.sort_by_key(|release| release.version);

    let from_index = position(&releases, from).ok_or(Endpoint::From)?;
    let to_index = position(&releases, to).ok_or(Endpoint::To)?;

    log::debug!(
        "Selected releases {} to {} at positions {}..={}.",
        from,
        to,
        from_index,
        to_index
    );

    // With `from < to` and sorted releases, `from_index < to_index` always holds.
    releases.truncate(to_index + 1);
    releases.drain(..from_index);

    Ok(releases)
}

/// The index of the first release with exactly this version.
fn position(releases: &[Release], version: Version) -> Option<usize> {
    releases.iter().position(|release| release.version == version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(version: &str) -> Release {
        Release {
            name: format!("ICU {version}"),
            body: format!("Notes for {version}."),
            version: Version::parse(version).unwrap(),
        }
    }

    fn names(releases: &[Release]) -> Vec<&str> {
        releases.iter().map(|r| r.name.as_str()).collect()
    }

    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    #[test]
    fn selects_inclusive_range() {
        let releases = vec![
            release("72.1"),
            release("73.0"),
            release("74.0"),
            release("75.1"),
        ];
        let selected = select_range(releases, v("73.0"), v("74.0")).unwrap();

        assert_eq!(names(&selected), ["ICU 73.0", "ICU 74.0"]);
    }

    #[test]
    fn sorts_unordered_input() {
        let releases = vec![
            release("75.1"),
            release("9.0"),
            release("74.0"),
            release("10.0"),
            release("72.1"),
        ];
        let selected = select_range(releases, v("9.0"), v("74.0")).unwrap();

        assert_eq!(
            names(&selected),
            ["ICU 9.0", "ICU 10.0", "ICU 72.1", "ICU 74.0"]
        );
    }

    #[test]
    fn covers_whole_list() {
        let releases = vec![release("74.0"), release("72.1"), release("73.0")];
        let selected = select_range(releases, v("72.1"), v("74.0")).unwrap();

        assert_eq!(names(&selected), ["ICU 72.1", "ICU 73.0", "ICU 74.0"]);
    }

    #[test]
    fn keeps_api_order_for_duplicates() {
        let mut first = release("73.0");
        first.body = "first".into();
        let mut second = release("73.0");
        second.body = "second".into();

        let releases = vec![release("74.0"), first, second, release("72.1")];
        let selected = select_range(releases, v("73.0"), v("74.0")).unwrap();

        let bodies: Vec<&str> = selected.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second", "Notes for 74.0."]);
    }

    #[test]
    fn reports_missing_from() {
        let releases = vec![release("72.1"), release("73.0")];
        let missing = select_range(releases, v("70.0"), v("99.0")).unwrap_err();

        assert_eq!(missing, Endpoint::From);
    }

    #[test]
    fn reports_missing_to() {
        let releases = vec![release("72.1"), release("73.0")];
        let missing = select_range(releases, v("72.1"), v("74.0")).unwrap_err();

        assert_eq!(missing, Endpoint::To);
    }

    #[test]
    fn fails_on_empty_list() {
        let missing = select_range(Vec::new(), v("1.0"), v("2.0")).unwrap_err();
        assert_eq!(missing, Endpoint::From);
    }
}
