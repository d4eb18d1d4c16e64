//! Transfermarkt query CLI
//!
//! Thin dispatch over the three query pipelines: runs one query and prints
//! the JSON reply to stdout.

use clap::{Parser, Subcommand};
use mercato::api::{self, Reply};
use mercato::fetch::HttpFetcher;
use mercato::Config;

#[derive(Parser)]
#[command(name = "mercato")]
#[command(about = "Player, club and squad data from transfermarkt.com", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search players by name
    Player {
        /// Free-text query
        query: String,
    },
    /// Search clubs by name
    Team {
        /// Club name
        name: String,
    },
    /// Fetch a club profile with its full squad
    Club {
        /// Site path identifying the club, e.g. "arsenal-fc/startseite/verein/11"
        slug: String,
    },
    /// Write a default config.toml
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Commands::Init = cli.command {
        if let Err(e) = Config::default().save(&cli.config) {
            eprintln!("Error writing config: {}", e);
            std::process::exit(1);
        }
        println!("Wrote {}", cli.config);
        return;
    }

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let fetcher = HttpFetcher::new(&config);

    let reply = match cli.command {
        Commands::Player { query } => api::search_players(&fetcher, &config, &query),
        Commands::Team { name } => api::search_teams(&fetcher, &config, &name),
        Commands::Club { slug } => api::club_profile(&fetcher, &config, &slug),
        Commands::Init => unreachable!(),
    };

    print_reply(&reply);
}

fn print_reply(reply: &Reply) {
    match serde_json::to_string_pretty(&reply.body) {
        Ok(body) => println!("{}", body),
        Err(e) => {
            eprintln!("Error encoding reply: {}", e);
            std::process::exit(1);
        }
    }
    if reply.status >= 400 {
        std::process::exit(1);
    }
}
