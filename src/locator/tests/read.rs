//! Read-through tests for `read_file` and `read_to_string`.

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8PathBuf;
use rstest::rstest;
use tempfile::TempDir;

use crate::LocateError;

use super::fixtures::{search_tree, tree_locator, write_file};

#[rstest]
fn read_file_round_trips_the_bytes_on_disk(
    search_tree: Result<(TempDir, Utf8PathBuf, Utf8PathBuf)>,
) -> Result<()> {
    let (_root, primary, fallback) = search_tree?;
    let contents = b"retries: 3\n";
    write_file(&fallback, "config.yaml", contents)?;

    let locator = tree_locator(&primary, &fallback);
    let read = locator
        .read_file("config")
        .map_err(|err| anyhow!("read failed: {err}"))?;
    ensure!(read == contents, "expected the exact bytes on disk");
    Ok(())
}

#[rstest]
fn read_to_string_round_trips_the_text_on_disk(
    search_tree: Result<(TempDir, Utf8PathBuf, Utf8PathBuf)>,
) -> Result<()> {
    let (_root, primary, fallback) = search_tree?;
    write_file(&primary, "config.yml", b"retries: 3\n")?;

    let locator = tree_locator(&primary, &fallback);
    let read = locator
        .read_to_string("config")
        .map_err(|err| anyhow!("read failed: {err}"))?;
    ensure!(read == "retries: 3\n", "expected the exact text on disk");
    Ok(())
}

#[rstest]
fn read_file_propagates_a_locating_failure_unchanged(
    search_tree: Result<(TempDir, Utf8PathBuf, Utf8PathBuf)>,
) -> Result<()> {
    let (_root, primary, fallback) = search_tree?;
    let locator = tree_locator(&primary, &fallback);
    match locator.read_file("missing") {
        Err(err @ LocateError::NotFound { .. }) => {
            ensure!(err.is_not_found(), "kind must survive propagation");
            Ok(())
        }
        other => Err(anyhow!("expected a locating error, got {other:?}")),
    }
}

#[rstest]
fn a_read_failure_after_resolution_is_a_filesystem_error(
    search_tree: Result<(TempDir, Utf8PathBuf, Utf8PathBuf)>,
) -> Result<()> {
    let (_root, primary, fallback) = search_tree?;
    // A directory named like the candidate resolves fine but cannot be read.
    let dir_candidate = primary.join("config.yaml");
    std::fs::create_dir(&dir_candidate).context("create directory candidate")?;

    let locator = tree_locator(&primary, &fallback);
    let resolved = locator
        .find("config")
        .map_err(|err| anyhow!("lookup failed: {err}"))?;
    ensure!(
        resolved == dir_candidate,
        "existence probing treats directories as hits: {resolved}"
    );
    match locator.read_file("config") {
        Err(LocateError::Io { path, .. }) => {
            ensure!(
                path == dir_candidate,
                "error must name the resolved path: {path}"
            );
            Ok(())
        }
        other => Err(anyhow!("expected a filesystem error, got {other:?}")),
    }
}
