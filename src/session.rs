use anyhow::Context;
use std::io::{BufRead, Write};

use crate::collect::{ask_policy, attach_stickers, collect_names, Prompter};
use crate::config::Config;
use crate::model::StickerPack;
use crate::parse::parse_readme;
use crate::utils::read_text;

pub const FOLDER_QUESTION: &str = "Enter folder name of sticker pack:";
pub const FULLNAME_QUESTION: &str = "Enter full name of sticker pack:";

/// One data-entry pass: identify the pack, parse its README, then collect
/// sticker names. Nothing is written here.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<StickerPack> {
    let folder = prompter.ask(FOLDER_QUESTION)?;
    let fullname = prompter.ask(FULLNAME_QUESTION)?;

    let path = config.readme_path(&folder);
    tracing::info!(path = %path.display(), "reading pack README");
    let text = read_text(&path)?;
    let mut pack = parse_readme(&folder, &fullname, &text)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let policy = ask_policy(prompter, config.standard_size)?;
    let names = collect_names(prompter, policy)?;
    attach_stickers(&mut pack, names, &config.base_url, &config.alt_placeholder);
    Ok(pack)
}
