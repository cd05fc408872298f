use crate::cli::Cli;
use sticker_entry::collect::Prompter;
use sticker_entry::config::Config;
use sticker_entry::output::write_pack_json;
use sticker_entry::session::run_session;
use sticker_entry::utils::ensure_parent_dir;

pub fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the prompts.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("sticker_entry={level}", level = crate_level);
    let env_filter =
        EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved config");

    let mut prompter = Prompter::stdio();
    let pack = run_session(&config, &mut prompter)?;

    ensure_parent_dir(&config.output)?;
    write_pack_json(&config.output, &pack)?;
    println!("[+] Wrote {} ({} stickers)", config.output.display(), pack.sticker_count());
    Ok(())
}

/// Flags override the config file, which overrides the defaults.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(year) = cli.year {
        config.year = year;
    }
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(out) = &cli.out {
        config.output = out.clone();
    }
    Ok(config)
}
