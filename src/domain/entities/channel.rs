use serde::{Deserialize, Serialize};

/// A named distribution target. Names are unique within an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub app_id: String,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, app_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_id: app_id.into(),
            name: name.into(),
        }
    }

    /// Find the channel named `name`.
    pub fn find_by_name<'a>(channels: &'a [Channel], name: &str) -> Option<&'a Channel> {
        channels.iter().find(|channel| channel.name == name)
    }
}
