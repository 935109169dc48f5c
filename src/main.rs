use clap::Parser;

mod cli;
mod commands;
mod config;
mod render;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    if let Err(err) = run(args) {
        log::debug!("{err:?}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> anyhow::Result<()> {
    let cli::Args {
        config,
        api_url,
        command,
    } = args;
    let mut cfg = config::Config::try_load_from_file_or_default(config)?;
    if let Some(api_url) = api_url {
        cfg.api.base_url = api_url;
    }
    let mut ctx = commands::Context::try_new(&cfg)?;
    commands::run(&mut ctx, command)
}
