use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Error,
    #[allow(dead_code)]
    Warning,
    #[allow(dead_code)]
    Info,
    #[allow(dead_code)]
    Success,
}

#[derive(Debug, Clone)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    /// Writes a badge-prefixed message to stderr. Stdout is reserved for the
    /// computed tag, so every diagnostic goes to stderr.
    pub fn log_message(&self, level: LogLevel, message: &str) {
        let formatted_status = self.format_status(level);
        eprintln!("{} {} {}", self.tool_badge(), formatted_status, message);
    }

    fn tool_badge(&self) -> String {
        let mut s = String::new();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push('[');

        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 250,
                g: 179,
                b: 135,
            })
        )
        .unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str("nexttag");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }

    fn format_status(&self, level: LogLevel) -> String {
        let mut s = String::new();

        let color = match level {
            LogLevel::Error => Color::Rgb {
                r: 243,
                g: 139,
                b: 168,
            },
            LogLevel::Warning => Color::Rgb {
                r: 249,
                g: 226,
                b: 175,
            },
            LogLevel::Info => Color::Rgb {
                r: 137,
                g: 180,
                b: 250,
            },
            LogLevel::Success => Color::Rgb {
                r: 166,
                g: 227,
                b: 161,
            },
        };

        let status = match level {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
        };

        s.push('[');
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str(status);
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }
}
