use serde::{Deserialize, Serialize};

/// An application registered with the code-push service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub display_name: String,
}

impl App {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Find the app whose id equals `app_id`.
    pub fn find<'a>(apps: &'a [App], app_id: &str) -> Option<&'a App> {
        apps.iter().find(|app| app.id == app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_matches_by_id_only() {
        let apps = vec![App::new("abc123", "Counter"), App::new("def456", "abc123")];
        let found = App::find(&apps, "abc123").unwrap();
        assert_eq!(found.display_name, "Counter");
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let apps = vec![App::new("abc123", "Counter")];
        assert!(App::find(&apps, "zzz").is_none());
    }
}
