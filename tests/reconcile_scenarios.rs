//! Integration tests driving the library through full read → reconcile →
//! write runs against real files, mirroring how the CLI uses it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use meridian_sources::defaults;
use meridian_sources::reconcile::Reconciler;
use meridian_sources::store::ListStore;
use meridian_sources::Error;

const URL: &str = defaults::BASE_URL;

/// Run one reconciliation the way the CLI does, without an enable/disable
/// request. Returns whether the file was rewritten.
fn run(path: &Path, release: &str, enabled: Option<bool>) -> meridian_sources::Result<bool> {
    let mut store = ListStore::open(path, defaults::HEADER)?;
    let entries = store.read_entries()?;
    let mut reconciler = Reconciler::new(entries, URL, defaults::COMPONENTS)?;
    reconciler.set_release(release);
    reconciler.add_missing(release);
    if let Some(flag) = enabled {
        reconciler.set_enabled(flag);
    }
    if reconciler.should_write() {
        store.write(reconciler.entries())?;
        return Ok(true);
    }
    Ok(false)
}

#[test]
fn missing_file_gets_header_and_both_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");

    assert!(run(&path, "jammy", Some(true)).unwrap());

    let content = fs::read_to_string(&path).unwrap();
    let expected = format!(
        "{}\n{}\ndeb {url} jammy main\ndeb-src {url} jammy main\n",
        defaults::HEADER[0],
        defaults::HEADER[1],
        url = URL,
    );
    assert_eq!(content, expected);
}

#[test]
fn existing_entry_release_updated_and_source_entry_added() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");
    fs::write(
        &path,
        format!(
            "# third-party repositories\n\
             deb http://archive.ubuntu.com/ubuntu focal main universe\n\
             deb {} focal main\n",
            URL
        ),
    )
    .unwrap();

    assert!(run(&path, "jammy", None).unwrap());

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    // Unrelated lines byte-identical, in their original positions.
    assert_eq!(lines[0], "# third-party repositories");
    assert_eq!(lines[1], "deb http://archive.ubuntu.com/ubuntu focal main universe");
    // Ours updated in place, deb-src appended.
    assert_eq!(lines[2], format!("deb {} jammy main", URL));
    assert_eq!(lines[3], format!("deb-src {} jammy main", URL));
    assert_eq!(lines.len(), 4);
}

#[test]
fn second_run_with_no_change_does_not_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");

    assert!(run(&path, "jammy", None).unwrap());
    let after_first = fs::read_to_string(&path).unwrap();
    let mtime_first = fs::metadata(&path).unwrap().modified().unwrap();

    assert!(!run(&path, "jammy", None).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), mtime_first);
}

#[test]
fn conflicting_enabled_entries_abort_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");
    let original = format!("deb {url} focal main\ndeb {url} jammy main\n", url = URL);
    fs::write(&path, &original).unwrap();

    let result = run(&path, "jammy", None);
    assert!(matches!(result, Err(Error::Conflict { .. })));
    // File on disk is bit-identical to before the failed run.
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn disable_then_enable_restores_original_form() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");

    run(&path, "jammy", None).unwrap();
    let enabled_form = fs::read_to_string(&path).unwrap();

    assert!(run(&path, "jammy", Some(false)).unwrap());
    let disabled_form = fs::read_to_string(&path).unwrap();
    assert_ne!(enabled_form, disabled_form);
    assert!(disabled_form.contains(&format!("# deb {} jammy main", URL)));

    assert!(run(&path, "jammy", Some(true)).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), enabled_form);
}

#[test]
fn disabled_entry_is_reconciled_without_being_enabled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");
    fs::write(
        &path,
        format!("# deb {url} focal main\ndeb-src {url} jammy main\n", url = URL),
    )
    .unwrap();

    // No enable/disable request: the commented state must survive, only the
    // release moves.
    assert!(run(&path, "jammy", None).unwrap());
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&format!("# deb {} jammy main", URL)));
    assert!(content.contains(&format!("deb-src {} jammy main", URL)));
}

#[test]
fn unrelated_lines_survive_repeated_runs_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meridian.list");
    let noise = "## hand-written note   with odd   spacing\n\
                 deb [arch=amd64] https://download.docker.com/linux/ubuntu jammy stable\n\
                 \n";
    fs::write(&path, noise).unwrap();

    run(&path, "jammy", None).unwrap();
    run(&path, "jammy", None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(noise));
}
