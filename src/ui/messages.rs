//! Coloured, icon-prefixed status messages for the terminal.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ";
const ICON_OK: &str = "✓";
const ICON_WARN: &str = "⚠";
const ICON_ERR: &str = "✗";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

/// Errors go to stderr so a piped table stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}
