//! Generate CLI command
//!
//! Builds a generation request from flags, presets or the configured
//! defaults, prints the result with its strength and records it in history.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_strength;
use crate::error::{PassgenResult, ValidationError};
use crate::models::{CharacterClass, ClassSelection, GenerationPreset, GenerationRequest};
use crate::services::{evaluate, HistoryLog, PasswordGenerator};
use crate::storage::Storage;

/// Arguments for `passgen generate`
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (6-32)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(6..=32))]
    pub length: Option<u32>,

    /// Include uppercase letters
    #[arg(short, long)]
    pub upper: bool,

    /// Include lowercase letters
    #[arg(short = 'w', long)]
    pub lower: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include special characters
    #[arg(short, long)]
    pub special: bool,

    /// Include every character class
    #[arg(long)]
    pub all: bool,

    /// Use a preset: weak, medium or strong
    #[arg(long, conflicts_with_all = ["length", "upper", "lower", "digits", "special", "all"])]
    pub preset: Option<String>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Do not record the passwords in history
    #[arg(long)]
    pub no_history: bool,

    /// Print only the passwords
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Resolve the flags into a request, falling back to the settings
    pub fn to_request(&self, settings: &Settings) -> PassgenResult<GenerationRequest> {
        if let Some(name) = &self.preset {
            let preset = GenerationPreset::parse(name).ok_or_else(|| {
                ValidationError::InvalidValue(format!(
                    "Unknown preset '{}' (expected weak, medium or strong)",
                    name
                ))
            })?;
            return Ok(preset.request());
        }

        let length = self
            .length
            .map(|l| l as usize)
            .unwrap_or(settings.default_length);

        let classes = if self.all {
            ClassSelection::all()
        } else {
            let flags = [
                (self.upper, CharacterClass::Uppercase),
                (self.lower, CharacterClass::Lowercase),
                (self.digits, CharacterClass::Digits),
                (self.special, CharacterClass::Special),
            ];
            let chosen: ClassSelection = flags
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, class)| *class)
                .collect();

            if chosen.is_empty() {
                settings.default_selection()
            } else {
                chosen
            }
        };

        Ok(GenerationRequest::new(classes, length))
    }
}

/// Handle the generate command
pub fn handle_generate_command(storage: &Storage, settings: &Settings, args: GenerateArgs) -> PassgenResult<()> {
    let request = args.to_request(settings)?;
    let mut generator = PasswordGenerator::new();
    let passwords = generator.generate_many(&request, args.count)?;

    if !args.no_history {
        HistoryLog::new(storage).append_all(passwords.iter().map(|p| p.as_str()))?;
    }

    for password in &passwords {
        if args.quiet {
            println!("{}", password);
        } else {
            println!("{}  {}", password, format_strength(evaluate(password.as_str())));
        }
    }

    Ok(())
}
