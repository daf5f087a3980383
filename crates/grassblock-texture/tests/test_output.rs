//! File output: primary texture plus the optional build copy.

use grassblock_texture::generate::{generate, DEFAULT_SEED, DEFAULT_SIZE};
use grassblock_texture::output::{publish, OutputKind, OutputLayout};
use grassblock_texture::png::hash_png;

fn count_pngs(dir: &std::path::Path) -> usize {
    let mut count = 0;
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            count += count_pngs(&path);
        } else if path.extension().is_some_and(|e| e == "png") {
            count += 1;
        }
    }
    count
}

#[test]
fn test_without_build_dir_writes_one_file() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(tmp.path());

    let report = publish(&generate(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SEED), &layout).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].kind, OutputKind::Primary);
    assert_eq!(count_pngs(tmp.path()), 1);
}

#[test]
fn test_with_build_dir_writes_two_identical_files() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("build")).unwrap();
    let layout = OutputLayout::new(tmp.path());

    publish(&generate(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SEED), &layout).unwrap();

    assert_eq!(count_pngs(tmp.path()), 2);
    let a = std::fs::read(layout.primary_path()).unwrap();
    let b = std::fs::read(layout.secondary_path()).unwrap();
    assert!(a == b, "build copy should match the primary texture");
}

#[test]
fn test_two_runs_write_identical_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    for dir in [first.path(), second.path()] {
        publish(
            &generate(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SEED),
            &OutputLayout::new(dir),
        )
        .unwrap();
    }

    let a = std::fs::read(OutputLayout::new(first.path()).primary_path()).unwrap();
    let b = std::fs::read(OutputLayout::new(second.path()).primary_path()).unwrap();
    assert!(a == b);
}

#[test]
fn test_rerun_overwrites_existing_texture() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(tmp.path());

    publish(&generate(32, 32, 1), &layout).unwrap();
    let report = publish(&generate(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_SEED), &layout).unwrap();

    let data = std::fs::read(layout.primary_path()).unwrap();
    assert_eq!(report.primary().unwrap().hash, hash_png(&data));
}
