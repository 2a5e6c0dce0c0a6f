use std::fmt::Display;

use console::style;

/// Styled terminal output for human-readable command results
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Aligned `label: value` line
    pub fn field(&self, label: &str, value: impl Display) {
        println!("  {:<24} {}", style(format!("{}:", label)).dim(), value);
    }

    pub fn item(&self, text: &str) {
        println!("  • {}", text);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
