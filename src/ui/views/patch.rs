use airlift::application::patch::PublishedPatch;
use airlift::domain::ports::PatchSummary;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_patch_header(
    project_root: &std::path::Path,
    channel: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Patch, "Airlift Patch");
    header.add("Project", project_root.display().to_string());
    header.add("Channel", channel);
    header.render(supports_color, supports_unicode)
}

pub fn render_patch_summary(
    summary: &PatchSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let app = if summary.app.display_name.is_empty() {
        summary.app.id.clone()
    } else {
        format!("{} ({})", summary.app.display_name, summary.app.id)
    };

    let mut header = CommandHeader::new(Icon::Patch, "Patch summary");
    header.add("App", app);
    header.add("Release", summary.release_version.as_str());
    header.add("Channel", summary.channel.as_str());
    header.add("Target", summary.target.to_string());
    header.add("Hash", summary.hash.as_str());
    header.add(
        "Artifact",
        format!(
            "{} ({})",
            summary.artifact_path.display(),
            format_size(summary.artifact_size)
        ),
    );
    header.render(supports_color, supports_unicode)
}

pub fn render_published(
    published: &PublishedPatch,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!(
            "Published patch {} for {} {} to channel {}",
            published.patch.number, published.app.id, published.release.version, published.channel.name
        ))
        .bold()
        .render(supports_color)
    );
    if published.channel_created {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("Channel {} was created", published.channel.name))
                .render(supports_color)
        ));
    }
    out
}

pub fn render_declined(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim("Cancelled, nothing was published.").render(supports_color)
    )
}

pub fn render_dry_run(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim("Dry run, nothing was published.").render(supports_color)
    )
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;

    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < MIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / MIB)
    }
}
