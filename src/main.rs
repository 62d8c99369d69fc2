use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use ssh_keysync::cli::commands;
use ssh_keysync::utils::logging::init_logging;
use ssh_keysync::Settings;

#[derive(Parser)]
#[command(name = "ssh-keysync")]
#[command(about = "Keep SSH deploy keys and ~/.ssh/config in sync with repository subscriptions")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite all key files and the SSH config from a subscription list
    Resync {
        /// Subscription list (JSON or JSON5)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Configure a single alias, keeping the others
    Add {
        /// Alias used as key file name and Host entry
        alias: String,

        /// Real host name of the Git server
        #[arg(long)]
        host: String,

        /// File containing the private key
        #[arg(short, long)]
        key_file: PathBuf,

        /// SOCKS proxy endpoint (host:port)
        #[arg(short, long)]
        proxy: Option<String>,
    },

    /// Remove an alias's key file and config block
    Remove {
        /// Alias to remove
        alias: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List configured aliases
    Show,

    /// Show resolved file locations
    Paths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Resync { file } => commands::resync::execute(&settings, file)?,
        Commands::Add {
            alias,
            host,
            key_file,
            proxy,
        } => commands::add::execute(&settings, &alias, &host, &key_file, proxy.as_deref())?,
        Commands::Remove { alias, force } => commands::remove::execute(&settings, &alias, force)?,
        Commands::Show => commands::show::execute(&settings)?,
        Commands::Paths => commands::show::paths(&settings)?,
    }

    Ok(())
}
