//! Strength CLI command

use crate::display::format_strength;
use crate::error::PassgenResult;
use crate::services::{evaluate, strength};

use super::prompt::prompt_password;

/// Handle the strength command; prompts with hidden input when no password is given
pub fn handle_strength_command(password: Option<String>) -> PassgenResult<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password to rate: ")?,
    };

    println!("{}", format_strength(evaluate(&password)));
    if !password.is_empty() {
        println!("Score: {}/8", strength::score(&password));
    }

    Ok(())
}
