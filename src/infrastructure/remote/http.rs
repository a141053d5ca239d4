//! Blocking reqwest client for the code-push REST API
//!
//! All endpoints live under `<hosted_url>/api/v1` and authenticate with the
//! session's API key in the `x-api-key` header.

use std::time::Duration;

use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::{App, Channel, Patch, Release};
use crate::domain::ports::{
    CodePushClient, CodePushClientFactory, RemoteError, RemoteResult, Session,
};
use crate::domain::value_objects::{BuildTarget, BuiltArtifact};

use super::wire::{
    error_message, AppDto, ChannelDto, CreateChannelRequest, CreatePatchRequest, PatchDto,
    PromoteRequest, ReleaseDto,
};

pub const API_KEY_HEADER: &str = "x-api-key";

const API_PREFIX: &str = "api/v1";
const USER_AGENT: &str = concat!("airlift/", env!("CARGO_PKG_VERSION"));

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

/// Time limits applied to every request.
///
/// `request` covers the whole exchange including the upload body, so the
/// default leaves it unbounded and only limits connection setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Option<Duration>,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            request: None,
        }
    }
}

/// Creates clients sharing one connection pool.
pub struct HttpClientFactory {
    http: Client,
    base_url: String,
}

impl HttpClientFactory {
    pub fn new(hosted_url: &str, timeouts: Timeouts) -> RemoteResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()?;
        Ok(Self {
            http,
            base_url: api_base(hosted_url),
        })
    }
}

impl CodePushClientFactory for HttpClientFactory {
    fn connect(&self, session: &Session) -> Box<dyn CodePushClient> {
        Box::new(HttpCodePushClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            api_key: session.api_key().to_string(),
        })
    }
}

fn api_base(hosted_url: &str) -> String {
    format!("{}/{}", hosted_url.trim_end_matches('/'), API_PREFIX)
}

pub struct HttpCodePushClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpCodePushClient {
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> RemoteResult<Response> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send()?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "response");
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(RemoteError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> RemoteResult<T> {
        Ok(self.send(self.http.get(self.url(path)).query(query))?.json()?)
    }
}

impl CodePushClient for HttpCodePushClient {
    fn list_apps(&self) -> RemoteResult<Vec<App>> {
        let apps: Vec<AppDto> = self.get_json("apps", &[])?;
        Ok(apps.into_iter().map(App::from).collect())
    }

    fn list_releases(&self, app_id: &str) -> RemoteResult<Vec<Release>> {
        let releases: Vec<ReleaseDto> = self.get_json("releases", &[("app_id", app_id)])?;
        Ok(releases.into_iter().map(Release::from).collect())
    }

    fn create_patch(&self, release_id: &str) -> RemoteResult<Patch> {
        let request = self
            .http
            .post(self.url("patches"))
            .json(&CreatePatchRequest { release_id });
        let patch: PatchDto = self.send(request)?.json()?;
        Ok(patch.into_patch(release_id))
    }

    fn upload_patch_artifact(
        &self,
        patch_id: &str,
        artifact: &BuiltArtifact,
        target: BuildTarget,
    ) -> RemoteResult<()> {
        let file = multipart::Part::bytes(artifact.contents.clone())
            .file_name(artifact.file_name());
        let form = multipart::Form::new()
            .text("arch", target.arch.as_str())
            .text("platform", target.platform.as_str())
            .text("hash", artifact.hash.to_string())
            .text("size", artifact.size().to_string())
            .part("file", file);

        let request = self
            .http
            .post(self.url(&format!("patches/{patch_id}/artifacts")))
            .multipart(form);
        self.send(request)?;
        Ok(())
    }

    fn list_channels(&self, app_id: &str) -> RemoteResult<Vec<Channel>> {
        let channels: Vec<ChannelDto> = self.get_json("channels", &[("app_id", app_id)])?;
        Ok(channels.into_iter().map(Channel::from).collect())
    }

    fn create_channel(&self, app_id: &str, name: &str) -> RemoteResult<Channel> {
        let request = self
            .http
            .post(self.url("channels"))
            .json(&CreateChannelRequest {
                app_id,
                channel: name,
            });
        let channel: ChannelDto = self.send(request)?.json()?;
        Ok(channel.into())
    }

    fn promote_patch(&self, patch_id: &str, channel_id: &str) -> RemoteResult<()> {
        let request = self
            .http
            .post(self.url("patches/promote"))
            .json(&PromoteRequest {
                patch_id,
                channel_id,
            });
        self.send(request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ArtifactHash;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response and hands back the raw request.
    fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        serve_after(Duration::ZERO, status, body)
    }

    /// Like `serve_once`, answering only after `delay`.
    fn serve_after(
        delay: Duration,
        status: &str,
        body: &str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                head.push_str(&line);
                if line == "\r\n" {
                    break;
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();
            thread::sleep(delay);
            let _ = reader.get_mut().write_all(response.as_bytes());
            head + &String::from_utf8_lossy(&body)
        });
        (format!("http://{addr}"), handle)
    }

    fn client(hosted_url: &str) -> Box<dyn CodePushClient> {
        client_with(hosted_url, Timeouts::default())
    }

    fn client_with(hosted_url: &str, timeouts: Timeouts) -> Box<dyn CodePushClient> {
        HttpClientFactory::new(hosted_url, timeouts)
            .unwrap()
            .connect(&Session::new("key-123"))
    }

    #[test]
    fn default_timeouts_bound_only_connection_setup() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.connect, Duration::from_secs(30));
        assert_eq!(timeouts.request, None);
    }

    #[test]
    fn slow_response_completes_without_request_limit() {
        let (url, server) = serve_after(Duration::from_millis(1500), "200 OK", "{}");

        let result = client(&url).promote_patch("p_1", "ch_1");
        server.join().unwrap();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn configured_request_limit_is_enforced() {
        let (url, _server) = serve_after(Duration::from_millis(1500), "200 OK", "{}");
        let timeouts = Timeouts {
            request: Some(Duration::from_millis(200)),
            ..Timeouts::default()
        };

        let err = client_with(&url, timeouts)
            .promote_patch("p_1", "ch_1")
            .unwrap_err();

        assert!(matches!(err, RemoteError::Transport(_)));
    }

    #[test]
    fn base_url_appends_api_prefix_once() {
        assert_eq!(api_base("https://api.airlift.dev/"), "https://api.airlift.dev/api/v1");
        assert_eq!(api_base("http://localhost:8080"), "http://localhost:8080/api/v1");
    }

    #[test]
    fn list_releases_sends_key_and_query() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"id": "r_1", "app_id": "abc123", "version": "1.0.0"}]"#,
        );

        let releases = client(&url).list_releases("abc123").unwrap();
        let request = server.join().unwrap();

        assert_eq!(releases, vec![Release::new("r_1", "abc123", "1.0.0")]);
        assert!(request.starts_with("GET /api/v1/releases?app_id=abc123 "));
        assert!(request.to_ascii_lowercase().contains("x-api-key: key-123"));
    }

    #[test]
    fn create_patch_posts_release_id() {
        let (url, server) = serve_once("201 Created", r#"{"id": "p_1", "number": 1}"#);

        let patch = client(&url).create_patch("r_1").unwrap();
        let request = server.join().unwrap();

        assert_eq!(patch.id, "p_1");
        assert!(request.starts_with("POST /api/v1/patches "));
        assert!(request.ends_with(r#"{"release_id":"r_1"}"#));
    }

    #[test]
    fn error_status_carries_server_message() {
        let (url, server) = serve_once("409 Conflict", r#"{"message": "channel exists"}"#);

        let err = client(&url).create_channel("abc123", "stable").unwrap_err();
        server.join().unwrap();

        assert_eq!(
            err,
            RemoteError::Status {
                status: 409,
                message: "channel exists".to_string()
            }
        );
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let (url, server) = serve_once("200 OK", r#"{"not": "a list"}"#);

        let err = client(&url).list_apps().unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}")).list_apps().unwrap_err();

        assert!(matches!(err, RemoteError::Transport(_)));
    }

    #[test]
    fn upload_sends_hashed_bytes_without_rereading_the_file() {
        let (url, server) = serve_once("201 Created", "{}");
        let dir = tempfile::tempdir().unwrap();
        let artifact = BuiltArtifact {
            path: dir.path().join("gone").join("libapp.so"),
            hash: ArtifactHash::new("hash-of-contents"),
            contents: b"aot-snapshot".to_vec(),
        };

        client(&url)
            .upload_patch_artifact("p_1", &artifact, BuildTarget::ANDROID_AARCH64)
            .unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("POST /api/v1/patches/p_1/artifacts "));
        assert!(request.contains("filename=\"libapp.so\""));
        assert!(request.contains("aot-snapshot"));
        assert!(request.contains("hash-of-contents"));
        assert!(request.contains("\r\n\r\n12\r\n"));
        assert!(request.contains("\r\n\r\naarch64\r\n"));
    }
}
