// src/reporting_test.rs

use super::*;
use crate::types::{Buffer, Detail, Position};
use std::path::{Path, PathBuf};

fn at(line: usize, column: usize) -> Position {
    Position { file: PathBuf::from("pkg/a.go"), line, column }
}

fn chan_finding() -> Finding {
    Finding::new(
        Idiom::ChannelMake,
        at(4, 7),
        Detail::Channel {
            element_type: "int".into(),
            buffer: Buffer::Literal("5".into()),
        },
    )
}

fn render(format: OutputFormat, findings: &[Finding]) -> String {
    let mut reporter = Reporter::new(Vec::new(), format).plain();
    let report = FileReport::ok(Path::new("pkg/a.go"), findings.to_vec());
    reporter.emit_file(&report).unwrap();
    String::from_utf8(reporter.finish().unwrap()).unwrap()
}

#[test]
fn test_text_line() {
    let out = render(OutputFormat::Text, &[chan_finding()]);
    assert_eq!(
        out,
        "pkg/a.go:4:7: channel_make found a channel of type int with literal buffer size 5\n"
    );
}

#[test]
fn test_json_record_shape() {
    let out = render(OutputFormat::Json, &[chan_finding()]);
    let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["idiom"], "channel_make");
    assert_eq!(v["file"], "pkg/a.go");
    assert_eq!(v["line"], 4);
    assert_eq!(v["column"], 7);
    assert_eq!(v["detail"]["element_type"], "int");
    assert_eq!(v["detail"]["buffer"]["kind"], "literal");
    assert_eq!(v["detail"]["buffer"]["text"], "5");
}

#[test]
fn test_json_omits_empty_detail() {
    let f = Finding::new(Idiom::NewCond, at(9, 2), Detail::None);
    let out = render(OutputFormat::Json, &[f]);
    let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["idiom"], "new_cond");
    assert!(v.get("detail").is_none());
}

#[test]
fn test_json_one_object_per_line() {
    let recv = Finding::new(
        Idiom::Lock,
        at(10, 2),
        Detail::Receiver { receiver: "s.mu".into() },
    );
    let out = render(OutputFormat::Json, &[chan_finding(), recv]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["detail"]["receiver"], "s.mu");
}

#[test]
fn test_summary_counts() {
    let files = vec![
        FileReport::ok(Path::new("a.go"), vec![chan_finding(), chan_finding()]),
        FileReport::failed(Path::new("b.go"), "syntax error".into()),
    ];
    let report = ScanReport::from_files(files, 3);
    let mut out = Vec::new();
    write_summary(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("channel_make"));
    assert!(text.contains("2 findings in 2 files (1 failed)"));
}

#[test]
fn test_catalog_lists_every_detector() {
    let mut out = Vec::new();
    write_catalog(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 22);
    assert!(text.contains("locker_decl"));
}
