//! End-to-end tests of the hst-sniff binary

use rstest::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const HEADER: &str = "FileName,FullFileName,SPO-FILE-NAME,TrIDNumber,FileExt,FileTypeDescription";

/// JPEG definition scoring 500 points: one pattern byte away from offset 0
const JPEG_DEF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TrID ver="2.00">
  <Info><FileType>JPEG Bitmap</FileType><Ext>JPG</Ext><Mime>image/jpeg</Mime></Info>
  <FrontBlock><Pattern><Bytes>D8</Bytes><Pos>1</Pos></Pattern></FrontBlock>
</TrID>"#;

struct Workspace {
    defs: TempDir,
    target: TempDir,
}

impl Workspace {
    fn target_path(&self, name: &str) -> String {
        self.target.path().join(name).display().to_string()
    }

    fn run(&self, extra: &[&str]) -> Output {
        run_with(
            &[
                "--defs-dir",
                self.defs.path().to_str().unwrap(),
                self.target.path().to_str().unwrap(),
            ],
            extra,
        )
    }
}

fn run_with(args: &[&str], extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hst-sniff"))
        .args(extra)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("HST_SNIFF_DEFS_DIR")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn write(dir: &Path, name: &str, content: &[u8]) {
    fs::write(dir.join(name), content).unwrap();
}

#[fixture]
fn workspace() -> Workspace {
    let defs = TempDir::new().unwrap();
    write(defs.path(), "bitmap-jpeg.trid.xml", JPEG_DEF.as_bytes());
    Workspace {
        defs,
        target: TempDir::new().unwrap(),
    }
}

#[rstest]
fn test_missing_argument() {
    let output = run_with(&[], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), ["Please enter a directory path to search."]);
}

#[rstest]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");
    let output = run_with(&[missing.to_str().unwrap()], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [format!("Directory Not found: .{}", missing.display())]
    );
}

#[rstest]
fn test_no_definitions() {
    let defs = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(target.path(), "A.HST", b"hello");

    let output = run_with(
        &["--defs-dir", defs.path().to_str().unwrap(), target.path().to_str().unwrap()],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [
            "No definitions available!",
            "Download an up to date defs library from http://mark0.ngi.it",
        ]
    );
}

#[rstest]
fn test_no_targets(workspace: Workspace) {
    write(workspace.target.path(), "readme.txt", b"not an archive");
    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [HEADER, "No target *.HST files available!"]
    );
}

#[rstest]
fn test_classifies_text_and_jpeg(workspace: Workspace) {
    write(workspace.target.path(), "A.HST", b"Dear Sir, please find enclosed\r\n");
    write(workspace.target.path(), "B.HST", &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);

    let output = workspace.run(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        [
            HEADER.to_string(),
            format!(
                "A.HST,{},A.txt,0,TXT,Default File Type to TXT",
                workspace.target_path("A.HST")
            ),
            format!(
                "B.HST,{},B.jpeg,500,JPEG,JPEG Bitmap",
                workspace.target_path("B.HST")
            ),
        ]
    );
}

#[rstest]
fn test_binary_column(workspace: Workspace) {
    write(workspace.target.path(), "A.HST", b"plain text");
    write(workspace.target.path(), "B.HST", &[0xFF, 0xD8, 0x00]);

    let output = workspace.run(&["--binary-column", "--skip-reload"]);
    let lines = stdout_lines(&output);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(lines[0], format!("{HEADER},IsBinary"));
    assert!(lines[1].ends_with(",false"));
    assert!(lines[2].ends_with(",true"));
}

#[cfg(unix)]
#[rstest]
#[case("halt", 1)]
#[case("continue", 3)]
fn test_unreadable_file_policy(workspace: Workspace, #[case] policy: &str, #[case] rows: usize) {
    write(workspace.target.path(), "A.HST", b"first");
    std::os::unix::fs::symlink(
        workspace.target.path().join("gone"),
        workspace.target.path().join("B.HST"),
    )
    .unwrap();
    write(workspace.target.path(), "C.HST", b"third");
    write(workspace.target.path(), "D.HST", b"fourth");

    let output = workspace.run(&["--on-error", policy]);
    let lines = stdout_lines(&output);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(lines[0], HEADER);
    let row_count = lines.iter().filter(|l| l.contains(".HST,")).count();
    assert_eq!(row_count, rows);

    if policy == "halt" {
        assert_eq!(
            &lines[1..],
            [
                format!("A.HST,{},A.txt,0,TXT,Default File Type to TXT", workspace.target_path("A.HST")),
                "* Error: Unable to open file.".to_string(),
                "  (maybe it's locked by another process?!)".to_string(),
            ]
        );
    } else {
        assert!(lines.iter().any(|l| l.starts_with("D.HST,")));
        assert!(String::from_utf8_lossy(&output.stderr).contains("B.HST"));
    }
}

#[rstest]
fn test_malformed_definition_fails(workspace: Workspace) {
    write(workspace.defs.path(), "broken.trid.xml", b"<TrID><Info>");
    write(workspace.target.path(), "A.HST", b"hello");

    let output = workspace.run(&[]);

    assert_ne!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), [HEADER]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load definitions"));
}

#[rstest]
fn test_missing_definitions_directory(workspace: Workspace) {
    write(workspace.target.path(), "A.HST", b"hello");
    let missing = workspace.defs.path().join("nowhere");

    let output = run_with(
        &["--defs-dir", missing.to_str().unwrap(), workspace.target.path().to_str().unwrap()],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [
            "No definitions available!",
            "Download an up to date defs library from http://mark0.ngi.it",
        ]
    );
}

#[rstest]
fn test_parent_components_are_collapsed(workspace: Workspace) {
    let data = workspace.target.path().join("data");
    fs::create_dir_all(workspace.target.path().join("a")).unwrap();
    fs::create_dir_all(&data).unwrap();
    write(&data, "A.HST", b"hello");
    let dotted = workspace.target.path().join("a").join("..").join("data");

    let output = run_with(
        &["--defs-dir", workspace.defs.path().to_str().unwrap(), dotted.to_str().unwrap()],
        &[],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        [
            HEADER.to_string(),
            format!(
                "A.HST,{},A.txt,0,TXT,Default File Type to TXT",
                workspace.target_path("data/A.HST")
            ),
        ]
    );
}

#[rstest]
fn test_missing_directory_message_is_collapsed() {
    let dir = TempDir::new().unwrap();
    let dotted = dir.path().join("a").join("..").join("nowhere");
    let output = run_with(&[dotted.to_str().unwrap()], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [format!("Directory Not found: .{}", dir.path().join("nowhere").display())]
    );
}
