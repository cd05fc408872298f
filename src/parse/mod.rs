//! README text -> `StickerPack`.
//!
//! Cleaning drops blank and template lines; `LineMachine` then walks the
//! remaining lines once, with the "link is on the next line" rules expressed
//! as explicit states.

pub mod clean;
pub mod date;
pub mod machine;

pub use clean::{clean_lines, NOISE_LINES};
pub use date::extract_date;
pub use machine::{classify, parse_features, LineKind, LineMachine, PackFields, State};

use crate::error::ParseError;
use crate::model::StickerPack;

/// Runs the extractor over already-cleaned lines.
pub fn parse_fields<S: AsRef<str>>(lines: &[S]) -> Result<PackFields, ParseError> {
    let mut machine = LineMachine::new();
    for line in lines {
        machine.feed(line.as_ref())?;
    }
    machine.finish()
}

/// Builds a pack (with no stickers yet) from cleaned README lines.
pub fn parse_pack<S: AsRef<str>>(
    pack: &str,
    fullname: &str,
    lines: &[S],
) -> Result<StickerPack, ParseError> {
    let fields = parse_fields(lines)?;
    let cn = fields.cn.ok_or(ParseError::MissingCnRelease)?;
    let featured = fields.featured.ok_or(ParseError::MissingFeatures)?;

    let mut out = StickerPack::new(pack, fullname, cn);
    out.en = fields.en;
    out.tumblr1 = fields.tumblr1;
    out.tumblr2 = fields.tumblr2;
    out.featured = featured;
    Ok(out)
}

/// `clean_lines` followed by `parse_pack`.
pub fn parse_readme(pack: &str, fullname: &str, text: &str) -> Result<StickerPack, ParseError> {
    let lines = clean_lines(text);
    tracing::debug!(lines = lines.len(), "cleaned README");
    parse_pack(pack, fullname, &lines)
}
