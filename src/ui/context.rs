use airlift::config::{ColorMode, Config};
use airlift::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
    /// Questions can be asked and answered
    pub interactive: bool,
}

impl UiContext {
    pub fn new(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(verbose, cli_color, cli_no_animation, config, caps)
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        // Log lines on stderr would tear a live region apart.
        let animation = !cli_no_animation
            && config.output.animation
            && caps.is_tty
            && !caps.is_ci
            && verbose == 0;

        let interactive = caps.is_tty && caps.stdin_is_tty && !caps.is_ci;

        Self {
            verbose,
            caps,
            color,
            unicode,
            animation,
            interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            stdin_is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
        }
    }

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        }
    }

    #[test]
    fn ci_forces_animation_off() {
        let ui = UiContext::from_caps(0, None, false, &Config::default(), ci_caps());
        assert!(!ui.animation);
    }

    #[test]
    fn ci_is_never_interactive() {
        let ui = UiContext::from_caps(0, None, false, &Config::default(), ci_caps());
        assert!(!ui.interactive);
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(0, None, false, &Config::default(), ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let config = Config::default();
        let ui = UiContext::from_caps(0, Some(ColorWhen::Always), false, &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn config_color_never_wins_over_auto_flag() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        let ui = UiContext::from_caps(0, Some(ColorWhen::Auto), false, &config, tty_caps());
        assert!(!ui.color);
    }

    #[test]
    fn no_animation_flag_and_verbose_disable_animation() {
        let config = Config::default();
        assert!(UiContext::from_caps(0, None, false, &config, tty_caps()).animation);
        assert!(!UiContext::from_caps(0, None, true, &config, tty_caps()).animation);
        assert!(!UiContext::from_caps(1, None, false, &config, tty_caps()).animation);
    }

    #[test]
    fn config_can_force_ascii() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ui = UiContext::from_caps(0, None, false, &config, tty_caps());
        assert!(!ui.unicode);
    }
}
