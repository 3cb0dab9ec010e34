use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file. Takes precedence over `DEPLOYMENT_VERIFIER__CONFIG`.
    #[clap(short, long)]
    pub config_path: Option<PathBuf>,
    /// Dotenv file loaded into the environment before settings are built.
    #[clap(long, default_value = ".env.local")]
    pub env_file: PathBuf,
    /// Broadcast record to verify instead of the one derived from settings.
    #[clap(short, long)]
    pub broadcast: Option<PathBuf>,
}
