#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    /// Written verbatim, without tags. Used for the lines other tooling greps for.
    Print,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    /// Errors go to stderr, everything else to stdout.
    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = self.render(level, message);
        match level {
            LogLevel::Error => eprintln!("{}", line),
            LogLevel::Print => println!("{}", line),
        }
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        self.log_message(level, message);
        for t in trace {
            match level {
                LogLevel::Error => eprintln!("     ↳ {}", t),
                LogLevel::Print => println!("     ↳ {}", t),
            }
        }
    }

    fn render(&self, level: LogLevel, message: &str) -> String {
        if level == LogLevel::Print {
            return message.to_string();
        }
        format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        let mut s = String::new();

        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}{}",
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            }),
            SetAttribute(Attribute::Bold)
        );
        s.push_str("Bump");
        let _ = write!(
            &mut s,
            "{}{}",
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Grey)
        );
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[Bump]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let mut s = String::new();

        let color = match level {
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Print => Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        };

        s.push('[');
        let _ = write!(
            &mut s,
            "{}{}",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold)
        );
        s.push_str(status_label(level));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", status_label(level))
    }
}

fn status_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "ERROR",
        LogLevel::Print => "PRINT",
    }
}
