pub mod collect;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parse;
pub mod session;
pub mod utils;

// re-export the types most callers need
pub use crate::error::{CollectError, ParseError};
pub use crate::model::{Release, Sticker, StickerPack};
