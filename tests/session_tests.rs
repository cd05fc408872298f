use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;
use sticker_entry::collect::Prompter;
use sticker_entry::config::Config;
use sticker_entry::session::run_session;
use sticker_entry::ParseError;

fn catalog(tag: &str, readme: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("sticker_entry_{}_{}", tag, std::process::id()));
    let dir = root.join("2021").join("summer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.txt"), readme).unwrap();
    root
}

#[test]
fn session_reads_readme_then_collects_names() {
    let root = catalog(
        "ok",
        "Released to CN on July 4, 2019\nhttps://cn.test\nFeatures Beach.\n",
    );
    let config = Config {
        root: root.clone(),
        ..Config::default()
    };
    let mut p = Prompter::new(Cursor::new("summer\nSummer Pack\nn\na\ny\nb\nn\n"), io::sink());
    let pack = run_session(&config, &mut p).unwrap();
    fs::remove_dir_all(&root).ok();

    assert_eq!(pack.pack, "summer");
    assert_eq!(pack.fullname, "Summer Pack");
    assert_eq!(pack.featured, vec!["beach"]);
    let hrefs: Vec<&str> = pack.stickers().iter().map(|s| s.href.as_str()).collect();
    // Links use the CN year, not the directory year.
    assert_eq!(
        hrefs,
        vec![
            "https://noktalis.github.io/ak-stickers/2019/summer/a.png",
            "https://noktalis.github.io/ak-stickers/2019/summer/b.png"
        ]
    );
}

#[test]
fn parse_failure_stops_before_collecting() {
    let root = catalog("bad", "Features Beach.\n");
    let config = Config {
        root: root.clone(),
        ..Config::default()
    };
    let mut p = Prompter::new(Cursor::new("summer\nSummer Pack\n"), io::sink());
    let err = run_session(&config, &mut p).unwrap_err();
    fs::remove_dir_all(&root).ok();

    assert!(matches!(err.downcast_ref::<ParseError>(), Some(ParseError::MissingCnRelease)));
}

#[test]
fn missing_readme_is_an_io_error() {
    let config = Config {
        root: std::env::temp_dir().join("sticker_entry_no_such_catalog"),
        ..Config::default()
    };
    let mut p = Prompter::new(Cursor::new("nope\nNope\n"), io::sink());
    let err = run_session(&config, &mut p).unwrap_err();
    assert!(err.downcast_ref::<io::Error>().is_some());
}
