use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use passgen::cli::{
    handle_export_command, handle_generate_command, handle_history_command, handle_import_command,
    handle_strength_command, handle_vault_command, GenerateArgs, HistoryCommands, VaultCommands,
};
use passgen::config::{paths::PassgenPaths, settings::Settings};
use passgen::storage::Storage;

#[derive(Parser)]
#[command(
    name = "passgen",
    version,
    about = "Password generator, strength checker and local credential vault",
    long_about = "PassGen generates passwords from configurable character sets, rates \
                  their strength, keeps a short history of what it generated and stores \
                  credentials in a local vault with JSON and CSV import/export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more passwords
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Strength {
        /// Password to rate (prompted for with hidden input when omitted)
        password: Option<String>,
    },

    /// Recently generated passwords
    #[command(subcommand)]
    History(HistoryCommands),

    /// Credential vault commands
    #[command(subcommand)]
    Vault(VaultCommands),

    /// Import credentials from a JSON or CSV file
    Import {
        /// File to import (.json, .csv or .xlsx)
        file: PathBuf,
        /// Override the format picked from the file extension (json or csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Export the vault to a JSON or CSV file
    Export {
        /// Output format (json or csv)
        #[arg(short, long)]
        format: Option<String>,
        /// Output path (defaults to passwords_YYYY-MM-DD.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PassgenPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Generate(args)) => {
            handle_generate_command(&storage, &settings, args)?;
        }
        Some(Commands::Strength { password }) => {
            handle_strength_command(password)?;
        }
        Some(Commands::History(cmd)) => {
            handle_history_command(&storage, cmd)?;
        }
        Some(Commands::Vault(cmd)) => {
            handle_vault_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Import { file, format }) => {
            handle_import_command(&storage, &file, format.as_deref())?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format.as_deref(), output)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("PassGen is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing PassGen at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'passgen generate' to create a password.");
        }
        Some(Commands::Config) => {
            println!("PassGen Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default length:  {}", settings.default_length);
            println!(
                "  Default classes: {}",
                settings
                    .default_classes
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("  Mask passwords:  {}", settings.mask_passwords);
        }
        None => {
            println!("PassGen - password generator and credential vault");
            println!();
            println!("Run 'passgen --help' for usage information.");
            println!("Run 'passgen generate' to create a password.");
        }
    }

    Ok(())
}
