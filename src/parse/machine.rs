use chrono::NaiveDate;

use super::date::extract_date;
use crate::error::ParseError;
use crate::model::Release;

pub const TUMBLR_PREFIX: &str = "https://arknights-archive.tumblr.com/";
pub const WIKI_PREFIX: &str = "https://arknights.wiki.gg/wiki/";

/// What a line means when read outside of any pending context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CnRelease,
    EnRelease,
    Tumblr,
    /// Caption followed by a link we do not record.
    CaptionPair,
    Features,
    Other,
}

/// Classifies a line; earlier kinds win when several would match.
pub fn classify(line: &str) -> LineKind {
    if line.contains("Released to CN") {
        LineKind::CnRelease
    } else if line.contains("Released to EN") {
        LineKind::EnRelease
    } else if line.contains(TUMBLR_PREFIX) {
        LineKind::Tumblr
    } else if line.to_lowercase().contains("correspond") || line.contains(WIKI_PREFIX) {
        LineKind::CaptionPair
    } else if line.contains("Features") {
        LineKind::Features
    } else {
        LineKind::Other
    }
}

/// `Features Funny, Cute.` -> `["funny", "cute"]`
pub fn parse_features(line: &str) -> Vec<String> {
    let rest = match line.find("Features") {
        Some(at) => &line[at + "Features".len()..],
        None => line,
    };
    let rest = rest.trim_start_matches(':').trim();
    let rest = rest.strip_suffix('.').unwrap_or(rest);
    rest.split(", ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Scanning,
    ExpectCnSource { date: NaiveDate },
    ExpectEnSource { date: NaiveDate },
    ExpectSecondTumblr,
    SkipOne,
}

/// Everything the README scan produced. Required fields are still optional
/// here; `parse_pack` decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackFields {
    pub cn: Option<Release>,
    pub en: Option<Release>,
    pub tumblr1: Option<String>,
    pub tumblr2: Option<String>,
    pub featured: Option<Vec<String>>,
}

/// Line-at-a-time extractor. Feed every cleaned line in order, then `finish`.
#[derive(Debug)]
pub struct LineMachine {
    state: State,
    fields: PackFields,
    lines_seen: usize,
}

impl Default for LineMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl LineMachine {
    pub fn new() -> Self {
        Self {
            state: State::Scanning,
            fields: PackFields::default(),
            lines_seen: 0,
        }
    }

    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        self.lines_seen += 1;
        let line_no = self.lines_seen;

        match self.state {
            State::Scanning => self.scan(line, line_no)?,
            State::ExpectCnSource { date } => {
                self.fields.cn = Some(Release { date, src: line.to_owned() });
                self.state = State::Scanning;
            }
            State::ExpectEnSource { date } => {
                self.fields.en = Some(Release { date, src: line.to_owned() });
                self.state = State::Scanning;
            }
            State::ExpectSecondTumblr => {
                self.state = State::Scanning;
                if line.contains(TUMBLR_PREFIX) {
                    tracing::debug!(line = line_no, "second tumblr source");
                    self.fields.tumblr2 = Some(line.to_owned());
                } else {
                    self.fields.tumblr2 = None;
                    self.scan(line, line_no)?;
                }
            }
            State::SkipOne => self.state = State::Scanning,
        }
        Ok(())
    }

    fn scan(&mut self, line: &str, line_no: usize) -> Result<(), ParseError> {
        match classify(line) {
            LineKind::CnRelease => {
                let date = extract_date(line, line_no)?;
                tracing::debug!(line = line_no, %date, "CN release");
                self.state = State::ExpectCnSource { date };
            }
            LineKind::EnRelease => {
                let date = extract_date(line, line_no)?;
                tracing::debug!(line = line_no, %date, "EN release");
                self.state = State::ExpectEnSource { date };
            }
            LineKind::Tumblr => {
                tracing::debug!(line = line_no, "tumblr source");
                self.fields.tumblr1 = Some(line.to_owned());
                self.state = State::ExpectSecondTumblr;
            }
            LineKind::CaptionPair => {
                tracing::debug!(line = line_no, "skipping caption and link");
                self.state = State::SkipOne;
            }
            LineKind::Features => {
                let featured = parse_features(line);
                tracing::debug!(line = line_no, ?featured, "features");
                self.fields.featured = Some(featured);
            }
            LineKind::Other => {}
        }
        Ok(())
    }

    /// Ends the scan. Fails if a rule was still waiting for its next line.
    pub fn finish(self) -> Result<PackFields, ParseError> {
        let expected = match self.state {
            State::Scanning | State::SkipOne => return Ok(self.fields),
            State::ExpectCnSource { .. } => "the CN source link",
            State::ExpectEnSource { .. } => "the EN source link",
            State::ExpectSecondTumblr => "the line after the tumblr link",
        };
        Err(ParseError::UnexpectedEnd {
            line: self.lines_seen,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Result<PackFields, ParseError> {
        let mut m = LineMachine::new();
        for l in lines {
            m.feed(l)?;
        }
        m.finish()
    }

    #[test]
    fn classify_prefers_earlier_rules() {
        assert_eq!(classify("Released to CN May 1, 2021 Features"), LineKind::CnRelease);
        assert_eq!(classify("Corresponding operators"), LineKind::CaptionPair);
        assert_eq!(classify("these CORRESPOND to"), LineKind::CaptionPair);
        assert_eq!(classify("https://arknights.wiki.gg/wiki/Amiya"), LineKind::CaptionPair);
        assert_eq!(classify("Features Funny."), LineKind::Features);
        assert_eq!(classify("hello"), LineKind::Other);
    }

    #[test]
    fn release_line_waits_for_source() {
        let mut m = LineMachine::new();
        m.feed("Released to CN May 1, 2021").unwrap();
        assert!(matches!(m.state, State::ExpectCnSource { .. }));
        // Would be a release line in Scanning; here it is just the source.
        m.feed("Released to EN June 2, 2022").unwrap();
        assert_eq!(m.state, State::Scanning);
        assert_eq!(m.fields.cn.as_ref().unwrap().src, "Released to EN June 2, 2022");
    }

    #[test]
    fn non_tumblr_line_after_tumblr_is_rescanned() {
        let f = run(&[
            "https://arknights-archive.tumblr.com/post/1",
            "Features Cute.",
        ])
        .unwrap();
        assert_eq!(f.tumblr1.as_deref(), Some("https://arknights-archive.tumblr.com/post/1"));
        assert_eq!(f.tumblr2, None);
        assert_eq!(f.featured, Some(vec!["cute".to_string()]));
    }

    #[test]
    fn skip_one_discards_following_line() {
        let f = run(&["Stickers correspond to:", "Features Hidden."]).unwrap();
        assert_eq!(f.featured, None);
    }

    #[test]
    fn skip_one_at_end_is_fine() {
        assert!(run(&["https://arknights.wiki.gg/wiki/Amiya"]).is_ok());
    }

    #[test]
    fn pending_states_fail_at_end() {
        let err = run(&["Released to CN May 1, 2021"]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { line: 1, .. }));
        let err = run(&["x", "Released to EN May 1, 2021"]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { line: 2, .. }));
        let err = run(&["https://arknights-archive.tumblr.com/post/1"]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { line: 1, .. }));
    }

    #[test]
    fn features_label_and_period_removed() {
        assert_eq!(parse_features("Features Funny, Cute."), vec!["funny", "cute"]);
        assert_eq!(
            parse_features("Features: Food, Sleepy Operators, Dr. Cameo."),
            vec!["food", "sleepy operators", "dr. cameo"]
        );
        assert!(parse_features("Features.").is_empty());
    }
}
