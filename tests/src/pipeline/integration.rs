#![cfg(test)]
use std::io::Cursor;

use shout_common::error::ReadError;
use shout_common::file::Filename;
use shout_common::report::Notice;
use shout_core::driver::{self, Outcome};

use crate::utils::{Recorder, Workspace};

/// Drives one full run the way the binary does: prompt, then pipeline.
fn run_with_input(ws: &Workspace, typed: &str, recorder: &Recorder) -> anyhow::Result<Outcome> {
    let mut input = Cursor::new(typed.to_string());
    let mut prompt_out: Vec<u8> = Vec::new();
    let filename = driver::prompt_filename(&mut input, &mut prompt_out)?;
    driver::run(&filename, &ws.config(), recorder)
}

#[test]
fn hello_world_becomes_uppercase_copy() -> anyhow::Result<()> {
    let ws = Workspace::new();
    ws.file("my_file.txt", "Hello World\n");
    let recorder = Recorder::default();

    let outcome = run_with_input(&ws, "my_file.txt\n", &recorder)?;

    assert!(matches!(outcome, Outcome::Written { bytes: 12, .. }));
    assert_eq!(ws.read("modified_my_file.txt").as_deref(), Some("HELLO WORLD\n"));
    assert_eq!(ws.read("my_file.txt").as_deref(), Some("Hello World\n"));
    Ok(())
}

#[test]
fn typed_name_is_trimmed_before_use() -> anyhow::Result<()> {
    let ws = Workspace::new();
    ws.file("notes.txt", "abc");
    let recorder = Recorder::default();

    run_with_input(&ws, "   notes.txt \t\n", &recorder)?;

    assert_eq!(ws.modified_files(), vec!["modified_notes.txt".to_string()]);
    Ok(())
}

#[test]
fn whitespace_only_file_creates_nothing() -> anyhow::Result<()> {
    let ws = Workspace::new();
    ws.file("empty.txt", "   \n");
    let recorder = Recorder::default();

    let outcome = run_with_input(&ws, "empty.txt\n", &recorder)?;

    assert!(matches!(
        outcome,
        Outcome::ExitedEarly {
            reason: ReadError::Empty { .. }
        }
    ));
    assert!(ws.modified_files().is_empty());
    assert!(recorder.saw(&Notice::EmptyContent {
        filename: Filename::new("empty.txt")
    }));
    assert!(recorder.saw(&Notice::ExitWithoutWriting));
    Ok(())
}

#[test]
fn missing_file_creates_nothing() -> anyhow::Result<()> {
    let ws = Workspace::new();
    let recorder = Recorder::default();

    let outcome = run_with_input(&ws, "missing.txt\n", &recorder)?;

    assert!(matches!(
        outcome,
        Outcome::ExitedEarly {
            reason: ReadError::NotFound { .. }
        }
    ));
    assert!(ws.modified_files().is_empty());
    assert!(recorder.saw(&Notice::NotFound {
        filename: Filename::new("missing.txt")
    }));
    assert!(!recorder
        .notices()
        .iter()
        .any(|n| matches!(n, Notice::WritingStarted { .. } | Notice::WritingCompleted)));
    Ok(())
}

#[test]
fn closed_input_is_reported_as_not_found() -> anyhow::Result<()> {
    let ws = Workspace::new();
    let recorder = Recorder::default();

    let outcome = run_with_input(&ws, "", &recorder)?;

    assert!(matches!(outcome, Outcome::ExitedEarly { .. }));
    assert!(ws.modified_files().is_empty());
    Ok(())
}

#[test]
fn full_notice_sequence_on_success() -> anyhow::Result<()> {
    let ws = Workspace::new();
    ws.file("a.txt", "x");
    let recorder = Recorder::default();

    run_with_input(&ws, "a.txt\n", &recorder)?;

    let source = Filename::new("a.txt");
    let target = Filename::new("modified_a.txt");
    assert_eq!(
        recorder.notices(),
        vec![
            Notice::ReadingStarted {
                filename: source.clone()
            },
            Notice::ContentEcho {
                content: shout_common::file::Content::new("x".into())
            },
            Notice::ReadingCompleted,
            Notice::WritingStarted {
                target: target.clone()
            },
            Notice::Written { target, bytes: 1 },
            Notice::WritingCompleted,
        ]
    );
    Ok(())
}

#[test]
fn rerun_overwrites_previous_output() -> anyhow::Result<()> {
    let ws = Workspace::new();
    ws.file("a.txt", "first version, long");
    run_with_input(&ws, "a.txt\n", &Recorder::default())?;

    ws.file("a.txt", "second");
    run_with_input(&ws, "a.txt\n", &Recorder::default())?;

    assert_eq!(ws.read("modified_a.txt").as_deref(), Some("SECOND"));
    Ok(())
}

#[test]
#[cfg(unix)]
fn unwritable_directory_keeps_source_and_reports() -> anyhow::Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    ws.file("a.txt", "content");
    fs::set_permissions(ws.path(), fs::Permissions::from_mode(0o555))?;

    if fs::File::create(ws.path().join("canary")).is_ok() {
        eprintln!("Skipping permission test: process bypasses file permissions.");
        fs::remove_file(ws.path().join("canary"))?;
        fs::set_permissions(ws.path(), fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let recorder = Recorder::default();
    let outcome = run_with_input(&ws, "a.txt\n", &recorder);
    fs::set_permissions(ws.path(), fs::Permissions::from_mode(0o755))?;

    assert!(matches!(outcome?, Outcome::WriteDenied { .. }));
    assert!(recorder.saw(&Notice::WritePermissionDenied {
        target: Filename::new("modified_a.txt")
    }));
    assert_eq!(recorder.notices().last(), Some(&Notice::WritingCompleted));
    assert!(ws.modified_files().is_empty());
    Ok(())
}
