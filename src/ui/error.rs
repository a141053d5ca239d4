use airlift::config::ConfigWarning;
use airlift::PatchError;

use crate::ui::ci::{github_actions_annotation, in_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error_message(
    message: &str,
    hint: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message).bold().render(supports_color)
    );
    if let Some(hint) = hint {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn format_patch_error(err: &PatchError, supports_color: bool, supports_unicode: bool) -> String {
    format_error_message(
        &err.to_string(),
        err.hint().as_deref(),
        supports_color,
        supports_unicode,
    )
}

fn annotate(message: &str, ui: &UiContext) {
    if ui.caps.is_ci && in_github_actions() {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, message, Some("Airlift"))
        );
    }
}

/// Print a failure to stderr, annotating it for GitHub Actions when running there.
pub fn print_error(message: &str, hint: Option<&str>, ui: &UiContext) {
    annotate(message, ui);
    eprint!("{}", format_error_message(message, hint, ui.color, ui.unicode));
}

pub fn print_patch_error(err: &PatchError, ui: &UiContext) {
    annotate(&err.to_string(), ui);
    eprint!("{}", format_patch_error(err, ui.color, ui.unicode));
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(message).render(supports_color)
    )
}
