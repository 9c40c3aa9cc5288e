//! Input and parsing helper functions for the CLI.

use std::io::{IsTerminal, Read};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse a `--format` value; `None` means the default table view.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<OutputFormat> {
    match value {
        None | Some("table") => Ok(OutputFormat::Table),
        Some("plain") => Ok(OutputFormat::Plain),
        Some(other) => Err(anyhow::anyhow!(
            "Invalid format: {} (use table or plain)",
            other
        )),
    }
}

/// Obtain the verse text for `add`: the `--text` flag wins, then piped stdin,
/// then an interactive prompt (unless `--no-input`).
pub fn read_verse_text(flag: Option<&str>, no_input: bool) -> anyhow::Result<String> {
    if let Some(text) = flag {
        return Ok(text.to_string());
    }

    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        let text = buffer.trim().to_string();
        if text.is_empty() {
            anyhow::bail!("No verse text provided on stdin (or use --text)");
        }
        return Ok(text);
    }

    if no_input {
        anyhow::bail!("No verse text provided (use --text with --no-input)");
    }

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Verse text")
        .interact_text()?;
    Ok(text)
}

/// Ask for confirmation before a destructive action; `--yes` skips the
/// prompt, and a non-interactive session refuses rather than guessing.
pub fn confirm_destructive(prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Refusing without confirmation in a non-interactive session (pass --yes)");
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
