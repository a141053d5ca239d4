use crate::ui::primitives::icon::Icon;

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Animated progress line for a running step.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    pub fn succeed(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            self.message
        )
    }

    pub fn fail(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            self.message
        )
    }
}

fn frames(supports_unicode: bool) -> &'static [char] {
    if supports_unicode {
        SPINNER_FRAMES_BRAILLE
    } else {
        SPINNER_FRAMES_ASCII
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = Spinner::new("Building release");
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = Spinner::new("Building release");
        assert_eq!(s.render(false), "- Building release");
    }

    #[test]
    fn tick_advances_and_wraps() {
        let mut s = Spinner::new("Uploading artifact");
        let first = s.render(false);
        s.tick();
        assert_ne!(first, s.render(false));
        for _ in 0..3 {
            s.tick();
        }
        assert_eq!(first, s.render(false));
    }

    #[test]
    fn finished_lines_carry_status_icon() {
        let s = Spinner::new("Promoting patch");
        assert_eq!(s.succeed(false, false), "[OK] Promoting patch");
        assert_eq!(s.fail(false, false), "[FAIL] Promoting patch");
    }
}
