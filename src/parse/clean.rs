/// Boilerplate lines from the README template that carry no pack data.
pub const NOISE_LINES: [&str; 8] = [
    "(if sheet from Oyuki twitter)",
    "Sticker sheet downloaded from @oyuki_gms",
    "https://twitter.com/oyuki_gms",
    "(@arknights-archive on tumblr)",
    "Stickers from @arknights-archive on tumblr",
    "(if stickers edited and cropped myself)",
    "Stickers edited by Nat",
    "https://www.arknights.global/fankit",
];

pub fn is_noise(line: &str) -> bool {
    NOISE_LINES.contains(&line)
}

/// Trimmed, non-empty, non-boilerplate lines in file order.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !is_noise(l))
        .map(str::to_owned)
        .collect()
}
