//! JSON shapes exchanged with the code-push service

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{App, Channel, Patch, Release};

/// Ids arrive as strings or integers depending on the deployment.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct AppDto {
    #[serde(deserialize_with = "id_string")]
    app_id: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<AppDto> for App {
    fn from(dto: AppDto) -> Self {
        App::new(dto.app_id, dto.display_name.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReleaseDto {
    #[serde(deserialize_with = "id_string")]
    id: String,
    #[serde(deserialize_with = "id_string")]
    app_id: String,
    version: String,
}

impl From<ReleaseDto> for Release {
    fn from(dto: ReleaseDto) -> Self {
        Release::new(dto.id, dto.app_id, dto.version)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PatchDto {
    #[serde(deserialize_with = "id_string")]
    id: String,
    number: u32,
}

impl PatchDto {
    /// The response omits the release; the caller knows it.
    pub(super) fn into_patch(self, release_id: &str) -> Patch {
        Patch {
            id: self.id,
            number: self.number,
            release_id: release_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChannelDto {
    #[serde(deserialize_with = "id_string")]
    id: String,
    #[serde(deserialize_with = "id_string")]
    app_id: String,
    channel: String,
}

impl From<ChannelDto> for Channel {
    fn from(dto: ChannelDto) -> Self {
        Channel::new(dto.id, dto.app_id, dto.channel)
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreatePatchRequest<'a> {
    pub release_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateChannelRequest<'a> {
    pub app_id: &'a str,
    pub channel: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct PromoteRequest<'a> {
    pub patch_id: &'a str,
    pub channel_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Human-readable failure text from an error response body.
pub(super) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                "request failed".to_string()
            } else {
                text.to_string()
            }
        })
}
