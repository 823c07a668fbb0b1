use browserino::general::{GeneralPreferences, Toggle};
use browserino::models::PrefValue;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;

    fn render(&self, no_color: bool) -> String {
        if no_color {
            self.to_plain()
        } else {
            self.to_colored()
        }
    }
}

/// One `key = value` line of a preference listing
pub struct ColorizePreference<'a>(pub &'a str, pub &'a PrefValue);

impl<'a> Colorize for ColorizePreference<'a> {
    fn to_colored(&self) -> String {
        format!("{} {} {}", self.0.bold().green(), "=".red(), self.1.to_string().yellow())
    }

    fn to_plain(&self) -> String {
        format!("{} = {}", self.0, self.1)
    }
}

/// The General tab, one setting per line
pub struct ColorizeGeneral<'a>(pub &'a GeneralPreferences);

impl<'a> ColorizeGeneral<'a> {
    fn toggles(&self) -> [(Toggle, bool); 2] {
        [
            (Toggle::CloseAfterCopy, self.0.close_after_copy),
            (Toggle::AlternativeShortcut, self.0.alternative_shortcut),
        ]
    }
}

impl<'a> Colorize for ColorizeGeneral<'a> {
    fn to_colored(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("{}\n", "Copy URL".bold()));
        for (toggle, enabled) in self.toggles() {
            let mark = if enabled {
                "[x]".green().to_string()
            } else {
                "[ ]".dimmed().to_string()
            };
            s.push_str(&format!("  {} {}\n", mark, toggle.description()));
        }
        s.push_str(&format!("{}\n", "Installed Browsers".bold()));
        if self.0.browsers.is_empty() {
            s.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for browser in &self.0.browsers {
            s.push_str(&format!("  {} {}\n", ">".red(), browser.yellow()));
        }
        s
    }

    fn to_plain(&self) -> String {
        let mut s = String::from("Copy URL\n");
        for (toggle, enabled) in self.toggles() {
            let mark = if enabled { "[x]" } else { "[ ]" };
            s.push_str(&format!("  {} {}\n", mark, toggle.description()));
        }
        s.push_str("Installed Browsers\n");
        if self.0.browsers.is_empty() {
            s.push_str("  (none)\n");
        }
        for browser in &self.0.browsers {
            s.push_str(&format!("  > {}\n", browser));
        }
        s
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Failure,
}

/// Prefix a message with a status mark
pub fn status_line(status: Status, message: &str, no_color: bool) -> String {
    let mark = match status {
        Status::Success => "✓",
        Status::Warning => "!",
        Status::Failure => "✗",
    };
    if no_color {
        return format!("{} {}", mark, message);
    }
    match status {
        Status::Success => format!("{} {}", mark.green(), message),
        Status::Warning => format!("{} {}", mark.yellow(), message),
        Status::Failure => format!("{} {}", mark.red(), message),
    }
}
