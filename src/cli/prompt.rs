//! Interactive prompts shared by the command handlers

use std::io::Write;

use crate::error::{PassgenError, PassgenResult};

/// Ask a yes/no question on stdin; anything but `yes` or `y` declines
pub fn confirm(question: &str) -> PassgenResult<bool> {
    print!("{} (yes/no): ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}

/// Read a password without echoing it
pub fn prompt_password(prompt: &str) -> PassgenResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| PassgenError::Io(format!("Failed to read password: {}", e)))
}
