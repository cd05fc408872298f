use serde::Serialize;

/// Where pack images are published; the year directory follows.
pub const STICKER_BASE_URL: &str = "https://noktalis.github.io/ak-stickers/";

/// Filled in by hand once the record has been generated.
pub const ALT_PLACEHOLDER: &str = "Alternative text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sticker {
    pub key: usize,
    pub name: String,
    pub href: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// Download link for a sticker image: `<base>/<year>/<pack>/<name>.png`.
pub fn sticker_href(base_url: &str, year: i32, pack: &str, name: &str) -> String {
    format!(
        "{}/{}/{}/{}.png",
        base_url.trim_end_matches('/'),
        year,
        pack,
        name
    )
}
