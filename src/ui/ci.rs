#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// Workflow command that GitHub Actions renders as an annotation.
pub fn github_actions_annotation(level: AnnotationLevel, message: &str, title: Option<&str>) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = title
        .map(|t| format!(" title={}", escape_workflow_command_value(t)))
        .unwrap_or_default();

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_value(message)
    )
}

pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape_workflow_command_value(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
