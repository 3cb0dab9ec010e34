use clap::Parser;
use deployment_verifier::{cli::Args, run, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(err) = dotenvy::from_path(&args.env_file) {
        log::debug!("{} is not loaded: {err}", args.env_file.display());
    }

    let settings = Settings::build(args.config_path)?;
    let verified = run(settings, args.broadcast).await?;

    log::info!("All contracts verified! ({verified} in total)");
    Ok(())
}
