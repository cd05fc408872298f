pub mod pack;
pub mod sticker;

pub use pack::{Release, StickerPack};
pub use sticker::{sticker_href, Sticker, ALT_PLACEHOLDER, STICKER_BASE_URL};
