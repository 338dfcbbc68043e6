//! Terminal presentation
//!
//! Styling for command output and the confirmation prompt. Prompts are only
//! shown on a terminal; in scripts and pipes the caller decides what to do
//! without asking.

use console::{Style, Term};
use inquire::Confirm;

use crate::engine::MemberStatus;
use crate::error::Result;

/// Whether a human can answer prompts
pub fn is_interactive() -> bool {
    Term::stderr().is_term() && Term::stdout().is_term()
}

/// Ask a yes/no question, defaulting to no
pub fn confirm(question: &str) -> Result<bool> {
    let answer = Confirm::new(question)
        .with_default(false)
        .with_help_message("Press 'y' to confirm, Enter or 'n' to cancel")
        .prompt()?;
    Ok(answer)
}

/// Print a line reporting a completed change
pub fn success(message: &str) {
    println!("{} {message}", Style::new().green().bold().apply_to("✓"));
}

/// Print a line about something left as it was
pub fn note(message: &str) {
    println!("{} {message}", Style::new().yellow().apply_to("!"));
}

/// Bold member name
pub fn member(name: &str) -> String {
    Style::new().bold().apply_to(name).to_string()
}

/// Fixed-width, colored status column for `ls --long`
pub fn status_label(status: MemberStatus) -> String {
    let (text, style) = match status {
        MemberStatus::Linked => ("linked", Style::new().green()),
        MemberStatus::Unlinked => ("unlinked", Style::new().yellow()),
        MemberStatus::Orphaned => ("orphaned", Style::new().red()),
    };
    style.apply_to(format!("{text:<8}")).to_string()
}

/// "1 file" / "2 files"
pub fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "file", "files"), "0 files");
        assert_eq!(plural(1, "file", "files"), "1 file");
        assert_eq!(plural(2, "directory", "directories"), "2 directories");
    }

    #[test]
    fn test_status_label_text() {
        let label = console::strip_ansi_codes(&status_label(MemberStatus::Orphaned)).to_string();
        assert_eq!(label, "orphaned");
        let label = console::strip_ansi_codes(&status_label(MemberStatus::Linked)).to_string();
        assert_eq!(label, "linked  ");
    }
}
