use fitcrm::commands::delete::Confirm;
use fitcrm::error::{FitcrmError, Result};
use std::io::{self, BufRead, Write};

/// Blocking y/N question on stdin. Anything other than `y`/`yes` is a no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        io::stdout().flush().map_err(FitcrmError::Io)?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(FitcrmError::Io)?;
        Ok(is_yes(&input))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
