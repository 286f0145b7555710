// cardsmith/src/ui/output_format.rs
//! Formatting of command results and diagnostics.
//!
//! Every function takes a `color` flag; callers pass `true` only when the
//! target stream is a terminal so piped output stays plain text.

use std::io::{self, Write};

use cardsmith_core::CardInfo;
use owo_colors::OwoColorize;

pub const STATUS_OK: &str = "OK";
pub const STATUS_INCORRECT: &str = "INCORRECT";

/// Prints `OK` or `INCORRECT` on its own line.
pub fn print_status<W: Write + ?Sized>(writer: &mut W, valid: bool, color: bool) -> io::Result<()> {
    match (valid, color) {
        (true, true) => writeln!(writer, "{}", STATUS_OK.green().bold()),
        (false, true) => writeln!(writer, "{}", STATUS_INCORRECT.red().bold()),
        (true, false) => writeln!(writer, "{}", STATUS_OK),
        (false, false) => writeln!(writer, "{}", STATUS_INCORRECT),
    }
}

/// Prints the four-line card information block.
pub fn print_card_info<W: Write + ?Sized>(writer: &mut W, info: &CardInfo, color: bool) -> io::Result<()> {
    let verdict = if info.valid { "yes" } else { "no" };
    writeln!(writer, "{}", info.card)?;
    if color {
        if info.valid {
            writeln!(writer, "Correct: {}", verdict.green())?;
        } else {
            writeln!(writer, "Correct: {}", verdict.red())?;
        }
    } else {
        writeln!(writer, "Correct: {}", verdict)?;
    }
    writeln!(writer, "Card Brand: {}", info.brand)?;
    writeln!(writer, "Card Issuer: {}", info.issuer)
}

/// Prints one value per line.
pub fn print_lines<W: Write + ?Sized, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    Ok(())
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

pub fn print_warn_message<W: Write + ?Sized>(writer: &mut W, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_status() {
        assert_eq!(render(|w| print_status(w, true, false)), "OK\n");
        assert_eq!(render(|w| print_status(w, false, false)), "INCORRECT\n");
    }

    #[test]
    fn test_colored_status_contains_word() {
        let out = render(|w| print_status(w, true, true));
        assert!(out.contains("OK"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_card_info_block() {
        let info = CardInfo {
            card: "4400430180300003".to_string(),
            valid: true,
            brand: "VISA".to_string(),
            issuer: "Kaspi Gold".to_string(),
        };
        assert_eq!(
            render(|w| print_card_info(w, &info, false)),
            "4400430180300003\nCorrect: yes\nCard Brand: VISA\nCard Issuer: Kaspi Gold\n"
        );
    }

    #[test]
    fn test_error_and_warning_prefixes() {
        assert_eq!(render(|w| print_error_message(w, "boom", false)), "Error: boom\n");
        assert_eq!(render(|w| print_warn_message(w, "hmm", false)), "Warning: hmm\n");
    }
}
