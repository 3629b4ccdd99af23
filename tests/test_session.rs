//! Tests for a full session: load, dialogue, and the save that always follows.

mod mocks;

use contact_book::models::{AddressBook, ContactRecord};
use contact_book::repl::{self, SessionEnd};
use contact_book::repositories::{AddressBookRepository, JsonFileRepository};
use mocks::MockAddressBookRepository;
use std::future::{pending, ready};
use tempfile::tempdir;

async fn run_with_input(
    repo: &dyn AddressBookRepository,
    input: &str,
) -> (anyhow::Result<SessionEnd>, String) {
    let mut output = Vec::new();
    let result = repl::run(repo, 7, input.as_bytes(), &mut output, pending::<()>()).await;
    (result, String::from_utf8(output).unwrap())
}

fn john() -> ContactRecord {
    let mut record = ContactRecord::new("John").unwrap();
    record.add_phone("1111111111").unwrap();
    record.add_birthday("12.06.1990").unwrap();
    record
}

#[tokio::test]
async fn test_exit_command_saves() {
    let repo = MockAddressBookRepository::new();

    let (result, _) = run_with_input(&repo, "add Jane 2222222222\nexit\n").await;

    assert_eq!(result.unwrap(), SessionEnd::ExitCommand);
    assert_eq!(repo.get_call_count("load"), 1);
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.stored().unwrap().find("Jane").is_some());
}

#[tokio::test]
async fn test_end_of_input_saves() {
    let repo = MockAddressBookRepository::new();

    let (result, _) = run_with_input(&repo, "add Jane 2222222222\n").await;

    assert_eq!(result.unwrap(), SessionEnd::EndOfInput);
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.stored().unwrap().find("Jane").is_some());
}

#[tokio::test]
async fn test_interrupt_saves() {
    let repo = MockAddressBookRepository::with_book(vec![john()].into_iter().collect());
    let mut output = Vec::new();

    // Input that never produces a line: the interrupt is the only way out
    let (_writer, reader) = tokio::io::duplex(16);
    let result = repl::run(
        &repo,
        7,
        tokio::io::BufReader::new(reader),
        &mut output,
        ready(()),
    )
    .await;

    assert_eq!(result.unwrap(), SessionEnd::Interrupted);
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(repo.stored().unwrap().len(), 1);
}

#[tokio::test]
async fn test_existing_book_is_used() {
    let repo = MockAddressBookRepository::with_book(vec![john()].into_iter().collect());

    let (_, output) = run_with_input(&repo, "phone John\nshow-birthday John\nclose\n").await;

    assert!(output.contains("John's phone number is 1111111111."));
    assert!(output.contains("John's birthday is on 12.06.1990."));
}

#[tokio::test]
async fn test_load_failure_starts_empty() {
    let repo = MockAddressBookRepository::with_book(vec![john()].into_iter().collect());
    repo.fail_loads();

    let (result, output) = run_with_input(&repo, "all\nexit\n").await;

    assert!(result.is_ok());
    assert!(output.contains("Address book is empty."));
    // The unreadable book is replaced on save
    assert!(repo.stored().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_failure_is_reported() {
    let repo = MockAddressBookRepository::new();
    repo.fail_saves();

    let (result, _) = run_with_input(&repo, "exit\n").await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to save address book"));
}

#[tokio::test]
async fn test_errors_never_end_the_session() {
    let repo = MockAddressBookRepository::new();

    let (result, output) = run_with_input(
        &repo,
        "\n\
         fly away\n\
         add John\n\
         add John 12345\n\
         change Ghost 1111111111\n\
         add-birthday Ghost 01.01.2000\n\
         hello\n\
         exit\n",
    )
    .await;

    assert_eq!(result.unwrap(), SessionEnd::ExitCommand);
    assert!(output.contains("Command not entered. Please enter a command."));
    assert!(output.contains("Invalid command.\n"));
    assert!(output.contains("Error: Invalid command. Usage: add <name> <phone>"));
    assert!(output.contains("Error: Phone number must be 10 digits, got: 12345"));
    assert!(output.contains("Error: Contact Ghost not found."));
    assert!(output.contains("How can I help you?"));
}

#[tokio::test]
async fn test_session_persists_across_runs_with_json_file() {
    let dir = tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("address_book.json"));

    let (first, _) = run_with_input(
        &repo,
        "add John 1111111111\n\
         add John 2222222222\n\
         add-birthday John 12.06.1990\n\
         add Jane 3333333333\n\
         exit\n",
    )
    .await;
    assert!(first.is_ok());

    let (second, output) = run_with_input(&repo, "all\nexit\n").await;
    assert!(second.is_ok());
    assert!(output.contains(
        "Contact name: Jane, phones: 3333333333\n\
         Contact name: John, phones: 1111111111; 2222222222, Birthday: 12.06.1990\n"
    ));

    let stored = repo.load().await.unwrap();
    let expected: AddressBook = {
        let mut john = ContactRecord::new("John").unwrap();
        john.add_phone("1111111111").unwrap();
        john.add_phone("2222222222").unwrap();
        john.add_birthday("12.06.1990").unwrap();
        let mut jane = ContactRecord::new("Jane").unwrap();
        jane.add_phone("3333333333").unwrap();
        vec![john, jane].into_iter().collect()
    };
    assert_eq!(stored, expected);
}
