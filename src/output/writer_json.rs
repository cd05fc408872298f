use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::prune::prune_nulls;
use crate::model::StickerPack;

/// The pack as published: unset fields are left out entirely.
pub fn pack_to_value(pack: &StickerPack) -> anyhow::Result<Value> {
    let mut v = serde_json::to_value(pack)?;
    prune_nulls(&mut v);
    Ok(v)
}

/// Pretty JSON with 4-space indent. Non-ASCII text is written as-is.
pub fn to_pretty_json(v: &Value) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    v.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

pub fn write_pack_json(path: &Path, pack: &StickerPack) -> anyhow::Result<()> {
    let text = to_pretty_json(&pack_to_value(pack)?)?;
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), stickers = pack.sticker_count(), "wrote pack record");
    Ok(())
}
