// tests/integration_scan.rs - Engine and discovery over real directories
use std::fs;
use std::path::Path;

use syncscout_core::analysis::Engine;
use syncscout_core::config::Config;
use syncscout_core::discovery;
use syncscout_core::types::{Detail, Idiom};
use tempfile::TempDir;

const WORKER: &str = "package worker

import \"sync\"

type Pool struct {
\tmu   sync.Mutex
\twg   sync.WaitGroup
\tjobs chan int
}

func (p *Pool) Start(n int) {
\tp.jobs = make(chan int, n)
\tfor i := 0; i < n; i++ {
\t\tp.wg.Add(1)
\t\tgo func() {
\t\t\tdefer p.wg.Done()
\t\t\tfor j := range p.jobs {
\t\t\t\tp.mu.Lock()
\t\t\t\t_ = j
\t\t\t\tp.mu.Unlock()
\t\t\t}
\t\t}()
\t}
}
";

const BROKEN: &str = "package broken\n\nfunc f() {\n\tx := \n";

fn workspace() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("pkg")).unwrap();
    fs::write(d.path().join("pkg/a_broken.go"), BROKEN).unwrap();
    fs::write(d.path().join("pkg/b_worker.go"), WORKER).unwrap();
    fs::write(
        d.path().join("main.go"),
        "package main\n\nfunc main() {\n\tdone := make(chan struct{})\n\tclose(done)\n}\n",
    )
    .unwrap();
    fs::write(d.path().join("notes.txt"), "var mu sync.Mutex\n").unwrap();
    d
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
}

#[test]
fn test_broken_file_does_not_stop_siblings() {
    let d = workspace();
    let config = Config::new();
    let found = discovery::discover(d.path(), &config);
    let report = Engine::new(&config).scan(&found.files);

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.failed_files, 1);

    let broken = &report.files[1];
    assert_eq!(relative(&broken.path, d.path()), "pkg/a_broken.go");
    assert!(broken.is_failed());
    assert!(broken.findings.is_empty());
    assert!(broken.error.as_deref().unwrap().contains("parse error"));

    let worker = &report.files[2];
    assert!(!worker.is_failed());
    let idioms: Vec<Idiom> = worker.findings.iter().map(|f| f.idiom).collect();
    assert_eq!(
        idioms,
        vec![
            Idiom::MutexField,
            Idiom::WaitGroupField,
            Idiom::ChannelMake,
            Idiom::WaitGroupAdd,
            Idiom::WaitGroupDone,
            Idiom::Lock,
            Idiom::Unlock,
        ]
    );
}

#[test]
fn test_struct_typed_channel_is_not_reported() {
    let d = workspace();
    let report = Engine::sequential().scan_one(&d.path().join("main.go"));
    assert_eq!(report.total_findings, 0);
    assert_eq!(report.failed_files, 0);
}

#[test]
fn test_computed_buffer_detail() {
    let d = workspace();
    let report = Engine::sequential().scan_one(&d.path().join("pkg/b_worker.go"));
    let make = report.findings().find(|f| f.idiom == Idiom::ChannelMake).unwrap();
    assert_eq!(make.message(), "found a channel of type int with a computed buffer size n");
    assert!(matches!(make.detail, Detail::Channel { .. }));
}

#[test]
fn test_parallel_matches_sequential() {
    let d = workspace();
    for i in 0..12 {
        fs::write(d.path().join(format!("pkg/gen_{i:02}.go")), WORKER).unwrap();
    }

    let mut config = Config::new();
    let files = discovery::discover(d.path(), &config).files;
    let sequential = Engine::new(&config).scan(&files);
    config.parallel = true;
    let parallel = Engine::new(&config).scan(&files);

    let seq: Vec<_> = sequential.findings().collect();
    let par: Vec<_> = parallel.findings().collect();
    assert_eq!(seq, par);
    assert_eq!(sequential.failed_files, parallel.failed_files);
    assert_eq!(sequential.counts_by_idiom(), parallel.counts_by_idiom());
}

#[test]
fn test_unreadable_file_is_recorded() {
    let d = tempfile::tempdir().unwrap();
    let report = Engine::sequential().scan_one(&d.path().join("gone.go"));
    assert_eq!(report.failed_files, 1);
    assert_eq!(report.total_findings, 0);
}

#[test]
fn test_empty_file_list() {
    let report = Engine::sequential().scan(&[]);
    assert_eq!(report.total_findings, 0);
    assert!(report.files.is_empty());
}
