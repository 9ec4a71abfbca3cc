//! Integration tests for language discovery and string package relocation

use filetime::FileTime;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ts4_toolkit::prelude::*;
use walkdir::WalkDir;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Relative path and content of every file under `dir`
fn snapshot(dir: &Path) -> BTreeSet<(PathBuf, Vec<u8>)> {
    WalkDir::new(dir)
        .into_iter()
        .map(Result::unwrap)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

fn install_with_two_languages() -> TempDir {
    let install = TempDir::new().unwrap();
    write(install.path(), "Data/Client/Strings_EN.package", b"en client");
    write(install.path(), "Data/Client/Strings_FR.package", b"fr client");
    write(install.path(), "Data/Client/readme.txt", b"unrelated");
    write(install.path(), "Delta/EP01/Strings_EN.package", b"en ep01");
    write(install.path(), "Delta/EP01/Strings_FR.package", b"fr ep01");
    write(install.path(), "Delta/GP02/Strings_EN.package", b"en gp02");
    install
}

#[test]
fn test_discovery_yields_exactly_installed_codes() {
    let install = install_with_two_languages();
    let codes = discover_languages(install.path(), &StringRules::sims4());
    assert_eq!(codes, vec!["EN", "FR"]);
}

#[test]
fn test_relocation_mirrors_tree_per_language() {
    let install = install_with_two_languages();
    let dest = TempDir::new().unwrap();

    let sink = MemorySink::new();
    let summary = run_relocation(&RelocationJob::new(install.path(), dest.path()), &sink, None).unwrap();

    assert_eq!(summary.languages, vec!["EN", "FR"]);
    assert_eq!(summary.copied.len(), 5);

    let expected: BTreeSet<(PathBuf, Vec<u8>)> = [
        ("EN/Data/Client/Strings_EN.package", b"en client".to_vec()),
        ("EN/Delta/EP01/Strings_EN.package", b"en ep01".to_vec()),
        ("EN/Delta/GP02/Strings_EN.package", b"en gp02".to_vec()),
        ("FR/Data/Client/Strings_FR.package", b"fr client".to_vec()),
        ("FR/Delta/EP01/Strings_FR.package", b"fr ep01".to_vec()),
    ]
    .into_iter()
    .map(|(p, c)| (PathBuf::from(p), c))
    .collect();
    assert_eq!(snapshot(dest.path()), expected);

    let lines = sink.lines();
    assert_eq!(lines[0], "▶ Processing: EN");
    assert_eq!(lines.iter().filter(|l| l.starts_with("  ✓ Copied:")).count(), 5);
}

#[test]
fn test_relocation_is_idempotent() {
    let install = install_with_two_languages();
    let dest = TempDir::new().unwrap();
    let job = RelocationJob::new(install.path(), dest.path());

    run_relocation(&job, &MemorySink::new(), None).unwrap();
    let first = snapshot(dest.path());
    run_relocation(&job, &MemorySink::new(), None).unwrap();

    assert_eq!(snapshot(dest.path()), first);
}

#[test]
fn test_missing_delta_is_not_an_error() {
    let install = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write(install.path(), "Data/Client/Strings_DE.package", b"de");

    let sink = MemorySink::new();
    let summary = run_relocation(&RelocationJob::new(install.path(), dest.path()), &sink, None).unwrap();

    assert_eq!(summary.copied, vec![("DE".to_string(), PathBuf::from("Data/Client/Strings_DE.package"))]);
    assert!(dest.path().join("DE/Data/Client/Strings_DE.package").is_file());
    assert!(!sink.lines().iter().any(|l| l.contains("ERROR")));
}

#[test]
fn test_copies_keep_modification_time() {
    let install = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write(install.path(), "Data/Client/Strings_IT.package", b"it");
    let source = install.path().join("Data/Client/Strings_IT.package");
    let stamp = FileTime::from_unix_time(1_500_000_000, 0);
    filetime::set_file_mtime(&source, stamp).unwrap();

    run_relocation(&RelocationJob::new(install.path(), dest.path()), &MemorySink::new(), None).unwrap();

    let copy = dest.path().join("IT/Data/Client/Strings_IT.package");
    let meta = fs::metadata(copy).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta), stamp);
}

/// A copy failure ends the run; earlier languages stay copied
#[test]
fn test_copy_failure_aborts_run() {
    let install = install_with_two_languages();
    let dest = TempDir::new().unwrap();
    // "FR" exists as a plain file, so nothing can be created beneath it.
    fs::write(dest.path().join("FR"), b"blocker").unwrap();

    let sink = MemorySink::new();
    let err = run_relocation(&RelocationJob::new(install.path(), dest.path()), &sink, None).unwrap_err();

    assert!(matches!(err, ToolError::Copy { .. }));
    assert!(dest.path().join("EN/Data/Client/Strings_EN.package").is_file());
    assert!(sink.lines().last().unwrap().starts_with("❌ ERROR:"));
}

#[test]
fn test_no_languages_completes() {
    let install = TempDir::new().unwrap();
    fs::create_dir_all(install.path().join("Data/Client")).unwrap();
    let dest = TempDir::new().unwrap();

    let sink = MemorySink::new();
    let summary = run_relocation(&RelocationJob::new(install.path(), dest.path()), &sink, None).unwrap();

    assert!(summary.copied.is_empty());
    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].contains("No languages detected"));
}

#[test]
fn test_relocation_through_worker() {
    let install = install_with_two_languages();
    let dest = TempDir::new().unwrap();
    let job = RelocationJob::new(install.path(), dest.path());

    let worker = Worker::new();
    let handle = worker
        .start(move |sink| run_relocation(&job, sink, Some(&NoopOpener)))
        .unwrap();
    let summary = handle.wait(|_| {}).unwrap();

    assert_eq!(summary.languages.len(), 2);
    assert!(!worker.is_busy());
}

/// A symlinked package is copied as the file it points to
#[cfg(unix)]
#[test]
fn test_symlinked_package_is_copied() {
    use std::os::unix::fs::symlink;

    let install = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write(install.path(), "Data/Client/Strings_PL.package", b"pl");
    write(install.path(), "shared/Strings_PL.package", b"pl ep03");
    fs::create_dir_all(install.path().join("Delta/EP03")).unwrap();
    symlink(
        install.path().join("shared/Strings_PL.package"),
        install.path().join("Delta/EP03/Strings_PL.package"),
    )
    .unwrap();

    let summary = run_relocation(&RelocationJob::new(install.path(), dest.path()), &MemorySink::new(), None).unwrap();

    assert_eq!(summary.copied.len(), 2);
    let copy = dest.path().join("PL/Delta/EP03/Strings_PL.package");
    assert!(!fs::symlink_metadata(&copy).unwrap().file_type().is_symlink());
    assert_eq!(fs::read(copy).unwrap(), b"pl ep03");
}
