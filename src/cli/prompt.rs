//! Interactive stdin prompts
//!
//! Thin input helpers for the interactive workflow. Prompts are written to
//! stderr so piped stdout stays clean, and both helpers re-prompt until the
//! input is valid.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Result};

/// Prompt until the user enters a non-empty line
pub fn string_input(label: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        bail!(
            "Cannot prompt for '{label}' in non-interactive mode.\n\
             Pass the value via command-line flags."
        );
    }

    loop {
        eprint!("{label}: ");
        io::stderr().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            bail!("Unexpected end of input while prompting for '{label}'");
        }

        let input = input.trim();
        if !input.is_empty() {
            return Ok(input.to_string());
        }
    }
}

/// Prompt until the user enters an integer within `[min, max]`
pub fn number_input(label: &str, min: usize, max: usize) -> Result<usize> {
    loop {
        let input = string_input(label)?;
        match input.parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            _ => {}
        }
    }
}
