use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use super::sticker::{sticker_href, Sticker};

/// A release date together with the link announcing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub date: NaiveDate,
    pub src: String,
}

/// One sticker pack record.
///
/// The CN release is mandatory, so `year()` is always defined and sticker
/// links can be derived as soon as the pack exists. Stickers can only be
/// appended, which keeps keys sequential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerPack {
    pub pack: String,
    pub fullname: String,
    pub cn: Release,
    pub en: Option<Release>,
    pub tumblr1: Option<String>,
    pub tumblr2: Option<String>,
    pub src: Option<String>,
    pub src_text: Option<String>,
    pub featured: Vec<String>,
    pub aliases: Vec<String>,
    pub note: Option<String>,
    stickers: Vec<Sticker>,
}

impl StickerPack {
    pub fn new(pack: impl Into<String>, fullname: impl Into<String>, cn: Release) -> Self {
        Self {
            pack: pack.into(),
            fullname: fullname.into(),
            cn,
            en: None,
            tumblr1: None,
            tumblr2: None,
            src: None,
            src_text: None,
            featured: Vec::new(),
            aliases: Vec::new(),
            note: None,
            stickers: Vec::new(),
        }
    }

    /// Calendar year of the CN release; names the image directory.
    pub fn year(&self) -> i32 {
        self.cn.date.year()
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    /// Number of stickers so far, which is also the key of the next one.
    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }

    /// Appends a sticker keyed by the current count, with its link derived
    /// from `base_url`, the CN year and the pack id.
    pub fn add_sticker(
        &mut self,
        base_url: &str,
        name: impl Into<String>,
        alt: impl Into<String>,
        caption: Option<String>,
    ) -> &Sticker {
        let name = name.into();
        let sticker = Sticker {
            key: self.sticker_count(),
            href: sticker_href(base_url, self.year(), &self.pack, &name),
            name,
            alt: alt.into(),
            caption,
        };
        tracing::debug!(key = sticker.key, href = %sticker.href, "added sticker");
        self.stickers.push(sticker);
        &self.stickers[self.stickers.len() - 1]
    }

    fn record(&self) -> PackRecord<'_> {
        PackRecord {
            pack: &self.pack,
            fullname: &self.fullname,
            cn_date: self.cn.date,
            cn_src: &self.cn.src,
            en_date: self.en.as_ref().map(|r| r.date),
            en_src: self.en.as_ref().map(|r| r.src.as_str()),
            tumblr1: self.tumblr1.as_deref(),
            tumblr2: self.tumblr2.as_deref(),
            src: self.src.as_deref(),
            src_text: self.src_text.as_deref(),
            featured: &self.featured,
            search: &self.aliases,
            note: self.note.as_deref(),
            stickers: &self.stickers,
        }
    }
}

/// Published layout of a pack. Unset values serialize as `null`; the
/// output stage strips them.
#[derive(Serialize)]
struct PackRecord<'a> {
    pack: &'a str,
    fullname: &'a str,
    #[serde(rename = "cn-date")]
    cn_date: NaiveDate,
    #[serde(rename = "cn-src")]
    cn_src: &'a str,
    #[serde(rename = "en-date")]
    en_date: Option<NaiveDate>,
    #[serde(rename = "en-src")]
    en_src: Option<&'a str>,
    #[serde(rename = "tumblr-source1")]
    tumblr1: Option<&'a str>,
    #[serde(rename = "tumblr-source2")]
    tumblr2: Option<&'a str>,
    src: Option<&'a str>,
    #[serde(rename = "src-text")]
    src_text: Option<&'a str>,
    featured: &'a [String],
    search: &'a [String],
    note: Option<&'a str>,
    stickers: &'a [Sticker],
}

impl Serialize for StickerPack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}
