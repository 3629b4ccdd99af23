//! Runs the built binary the way a terminal would: stdin stays open and the
//! session ends through a command or an interrupt.
#![cfg(unix)]

use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const EXIT_TIMEOUT: Duration = Duration::from_secs(10);

fn spawn(workdir: &Path, data_file: &Path) -> Child {
    Command::new(env!("CARGO_BIN_EXE_contact-book"))
        .current_dir(workdir)
        .env("ADDRESS_BOOK_FILE", data_file)
        .env_remove("RUST_LOG")
        .env_remove("BIRTHDAY_WINDOW_DAYS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Read stdout until `needle` shows up. The prompt has no trailing newline,
/// so this reads byte by byte.
fn read_until(stdout: &mut ChildStdout, needle: &str) -> String {
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !String::from_utf8_lossy(&seen).contains(needle) {
        let n = stdout.read(&mut byte).unwrap();
        assert!(
            n > 0,
            "stdout closed before {:?}, got: {}",
            needle,
            String::from_utf8_lossy(&seen)
        );
        seen.push(byte[0]);
    }
    String::from_utf8(seen).unwrap()
}

fn wait_with_timeout(child: &mut Child) -> Option<ExitStatus> {
    let deadline = Instant::now() + EXIT_TIMEOUT;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

fn send_interrupt(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_interrupt_with_open_stdin_saves_and_exits() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("address_book.json");
    let mut child = spawn(dir.path(), &data_file);
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    read_until(&mut stdout, "Enter a command: ");
    stdin.write_all(b"add John 1111111111\n").unwrap();
    stdin.flush().unwrap();
    read_until(&mut stdout, "Contact added.\nEnter a command: ");

    // stdin stays open: the blocked read must not keep the process alive
    send_interrupt(&child);

    let status = wait_with_timeout(&mut child);
    if status.is_none() {
        let _ = child.kill();
        panic!("process still running {:?} after SIGINT", EXIT_TIMEOUT);
    }

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert!(rest.contains("Good bye!"));

    let saved = std::fs::read_to_string(&data_file).unwrap();
    assert!(saved.contains("John"));
    assert!(saved.contains("1111111111"));
    drop(stdin);
}

#[test]
fn test_exit_with_trailing_words_saves_and_exits() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("address_book.json");
    let mut child = spawn(dir.path(), &data_file);
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    read_until(&mut stdout, "Enter a command: ");
    stdin
        .write_all(b"add Jane 2222222222\nexit now\n")
        .unwrap();
    stdin.flush().unwrap();

    let status = wait_with_timeout(&mut child);
    if status.is_none() {
        let _ = child.kill();
        panic!("process still running {:?} after exit", EXIT_TIMEOUT);
    }
    assert!(status.unwrap().success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert!(rest.contains("Good bye!"));

    let saved = std::fs::read_to_string(&data_file).unwrap();
    assert!(saved.contains("Jane"));
    drop(stdin);
}
