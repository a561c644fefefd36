//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, recipe quantity formatting, and Unicode symbols.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use pantry_lib::recipe::Macros;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
  pub const STAR: &str = "★";
  pub const CHECKED: &str = "[x]";
  pub const UNCHECKED: &str = "[ ]";
}

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{}", value as i64)
  } else {
    format!("{:.1}", value)
  }
}

pub fn format_weight(grams: f64) -> String {
  format!("{} g", format_number(grams))
}

/// One-line macro summary, skipping absent values.
pub fn format_macros(macros: &Macros) -> String {
  let parts = [
    ("kcal", macros.calories, ""),
    ("protein", macros.protein, " g"),
    ("carbs", macros.carbs, " g"),
    ("fat", macros.fat, " g"),
    ("fiber", macros.fiber, " g"),
  ];
  parts
    .iter()
    .filter_map(|(label, value, unit)| value.map(|v| format!("{} {}{}", label, format_number(v), unit)))
    .collect::<Vec<_>>()
    .join(" · ")
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
