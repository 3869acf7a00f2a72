//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const CYAN: &'static str = "\x1b[36m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_BLUE: &'static str = "\x1b[94m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text when enabled
pub fn colorize_if(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Apply color to text if the terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    colorize_if(text, color, supports_formatting())
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Explicit opt-out always wins
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if cfg!(test) {
        return false;
    }

    // Redirected output gets plain text
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) if term == "dumb" || term.is_empty() => false,
        Ok(_) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_if_enabled() {
        let result = colorize_if("test", Colors::RED, true);
        assert_eq!(result, "\x1b[31mtest\x1b[0m");
    }

    #[test]
    fn test_colorize_if_disabled() {
        let result = colorize_if("test", Colors::RED, false);
        assert_eq!(result, "test");
    }

    #[test]
    fn test_colorize_in_tests_is_plain() {
        // cfg!(test) disables formatting
        assert_eq!(colorize("test", Colors::GREEN), "test");
    }

    #[test]
    fn test_color_constants_are_ansi() {
        assert!(Colors::RESET.starts_with('\x1b'));
        assert!(Colors::BOLD.starts_with('\x1b'));
        assert!(Colors::BRIGHT_YELLOW.starts_with('\x1b'));
    }
}
