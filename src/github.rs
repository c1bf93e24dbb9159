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

// API documentation:
// https://docs.github.com/en/rest/releases/releases#list-releases

use color_eyre::eyre::{Result, WrapErr};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::Settings;
use crate::release::{releases_from_entries, RawRelease, Release};

/// The number of releases on the single page that we request. This is the maximum that GitHub allows.
/// Older releases beyond the first page are not downloaded.
const PER_PAGE: &str = "100";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
/// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Prepare a client to access the GitHub API.
fn client(settings: &Settings) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
    headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(settings.timeout())
        .build()
        .wrap_err("Failed to prepare the HTTP client")
}

/// Download the release list and keep only the final releases of the configured project,
/// in no particular order, which depends on the response from GitHub.
#[tokio::main]
pub async fn fetch_releases(settings: &Settings) -> Result<Vec<Release>> {
    let url = settings.releases_url();
    let client = client(settings)?;

    log::info!("Downloading the release list from {}.", url);

    let text = client
        .get(&url)
        .query(&[("per_page", PER_PAGE)])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .wrap_err_with(|| format!("Failed to download the release list from {url}"))?
        .text()
        .await
        .wrap_err_with(|| format!("Failed to download the release list from {url}"))?;

    log::info!("Finished downloading the release list.");

    let entries: Vec<RawRelease> = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse the release list from {url}"))?;

    Ok(releases_from_entries(entries, &settings.prefix))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver};
    use std::thread;

    use super::*;
    use crate::version::Version;

    /// Serve a single HTTP response on a local port. Returns the API base address
    /// and a channel that delivers the raw request once it has arrived.
    pub(crate) fn serve_once(status: &str, body: &str) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buffer = [0; 1024];
            // A GET request has no body, so the request ends with the empty line after the headers.
            while !request.ends_with(b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            sender
                .send(String::from_utf8_lossy(&request).into_owned())
                .unwrap();
        });

        (address, receiver)
    }

    fn settings(api_url: String) -> Settings {
        Settings {
            api_url,
            timeout: 5,
            ..Settings::default()
        }
    }

    #[test]
    fn sends_github_headers() {
        let (address, request) = serve_once("200 OK", "[]");
        let releases = fetch_releases(&settings(address)).unwrap();
        let request = request.recv().unwrap().to_lowercase();

        assert!(releases.is_empty());
        assert!(request.starts_with("get /repos/unicode-org/icu/releases?per_page=100 http/1.1"));
        assert!(request.contains("accept: application/vnd.github+json"));
        assert!(request.contains("x-github-api-version: 2022-11-28"));
        assert!(request.contains("user-agent: icu-relnotes/"));
    }

    #[test]
    fn filters_response() {
        let body = r#"[
            {"name": "ICU 75.1", "body": "New", "prerelease": true},
            {"name": "ICU 74.2", "body": "Fixes", "prerelease": false},
            {"name": "Unrelated 1.0", "body": "", "prerelease": false}
        ]"#;
        let (address, _request) = serve_once("200 OK", body);
        let releases = fetch_releases(&settings(address)).unwrap();

        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].version, Version { major: 74, minor: 2 });
    }

    #[test]
    fn fails_on_invalid_json() {
        let (address, _request) = serve_once("200 OK", "<html>Not JSON</html>");
        let error = fetch_releases(&settings(address)).unwrap_err();

        assert!(error.to_string().starts_with("Failed to parse the release list"));
    }

    #[test]
    fn fails_on_error_status() {
        let (address, _request) = serve_once("404 Not Found", r#"{"message": "Not Found"}"#);
        let error = fetch_releases(&settings(address)).unwrap_err();

        assert!(error.to_string().starts_with("Failed to download the release list"));
    }
}
