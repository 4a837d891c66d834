// cli/src/commands.rs

// Command-line arguments and subcommands for the thalcare CLI.
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "thalcare", version, about = "Inspect a thalassemia care session")]
pub struct Cli {
    /// Config file; falls back to $THALCARE_CONFIG, then ./thalcare.yaml.
    #[clap(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// Print the home-screen summary as JSON.
    Dashboard {
        /// Seed snapshot (.yaml/.yml/.json); overrides `store.seed_path`.
        #[clap(long)]
        seed: Option<PathBuf>,
        /// Catalog (.yaml/.yml/.json) used to name medications; demo catalog when absent.
        #[clap(long)]
        catalog: Option<PathBuf>,
        /// Evaluate at this RFC 3339 instant instead of now.
        #[clap(long)]
        at: Option<String>,
    },
    /// Check credentials against the configured demo pair.
    Login {
        #[clap(long)]
        username: String,
        #[clap(long, env = "THALCARE_LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the bundled demo snapshot.
    Seed {
        #[clap(long, value_enum, default_value_t = SeedFormat::Yaml)]
        format: SeedFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedFormat {
    Yaml,
    Json,
}
