use std::io::{BufRead, Write};

use super::prompt::Prompter;
use crate::error::CollectError;
use crate::model::StickerPack;

pub const STANDARD_PACK_SIZE: usize = 16;

pub const STANDARD_QUESTION: &str = "Is this sticker pack the standard size of at least 16? (y/n)";
pub const NAME_QUESTION: &str = "Enter sticker's file name (without file extension):";
pub const ANOTHER_QUESTION: &str = "Add another sticker? (y/n)";

/// When the operator gets asked whether to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// No questions until `minimum` names are in, then after every name.
    Standard { minimum: usize },
    /// After every name.
    NonStandard,
}

impl SizePolicy {
    fn asks_after(&self, collected: usize) -> bool {
        match *self {
            SizePolicy::Standard { minimum } => collected >= minimum,
            SizePolicy::NonStandard => true,
        }
    }
}

pub fn ask_policy<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    standard_size: usize,
) -> Result<SizePolicy, CollectError> {
    let question = if standard_size == STANDARD_PACK_SIZE {
        STANDARD_QUESTION.to_owned()
    } else {
        format!("Is this sticker pack the standard size of at least {}? (y/n)", standard_size)
    };
    Ok(if prompter.confirm(&question)? {
        SizePolicy::Standard {
            minimum: standard_size,
        }
    } else {
        SizePolicy::NonStandard
    })
}

/// Reads sticker names until the policy allows a stop and the operator says `n`.
pub fn collect_names<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    policy: SizePolicy,
) -> Result<Vec<String>, CollectError> {
    let mut names = Vec::new();
    loop {
        names.push(prompter.ask(NAME_QUESTION)?);
        if policy.asks_after(names.len()) && prompter.decline(ANOTHER_QUESTION)? {
            break;
        }
    }
    tracing::info!(count = names.len(), ?policy, "collected sticker names");
    Ok(names)
}

/// Appends one sticker per name, in order.
pub fn attach_stickers<I, S>(pack: &mut StickerPack, names: I, base_url: &str, alt: &str)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        pack.add_sticker(base_url, name, alt, None);
    }
}
