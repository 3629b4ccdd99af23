//! One handler per command.
//!
//! Each handler returns the reply text on success. Errors are returned as
//! [`AddressBookError`] and rendered by the caller.

use super::context::CommandContext;
use super::parser::Command;
use crate::birthdays::upcoming_birthdays;
use crate::domain::PhoneNumber;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::UpsertOutcome;
use tracing::debug;

/// Run `command` against the context. `Exit` is handled by the session.
pub fn handle(ctx: &mut CommandContext, command: Command) -> AddressBookResult<String> {
    debug!(?command, "Handling command");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(ctx, &name, &phone),
        Command::Change { name, phone } => change_phone(ctx, &name, &phone),
        Command::Phone { name } => show_phone(ctx, &name),
        Command::All => Ok(show_all(ctx)),
        Command::AddBirthday { name, birthday } => add_birthday(ctx, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(ctx, &name),
        Command::Birthdays => Ok(birthdays(ctx)),
        Command::Exit => Ok(super::FAREWELL.to_string()),
    }
}

fn add_contact(ctx: &mut CommandContext, name: &str, phone: &str) -> AddressBookResult<String> {
    match ctx.address_book_mut().upsert_phone(name, phone)? {
        UpsertOutcome::Added => Ok("Contact added.".to_string()),
        UpsertOutcome::Updated => Ok("Contact updated.".to_string()),
    }
}

/// Replace the contact's only phone.
fn change_phone(ctx: &mut CommandContext, name: &str, phone: &str) -> AddressBookResult<String> {
    let record = ctx
        .address_book_mut()
        .find_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;

    let old = match record.phones() {
        [only] => only.as_str().to_string(),
        [] => return Err(AddressBookError::NoPhones(name.to_string())),
        _ => return Err(AddressBookError::MultiplePhones(name.to_string())),
    };

    record.edit_phone(&old, phone)?;
    Ok(format!("Phone number updated for {}.", name))
}

fn show_phone(ctx: &CommandContext, name: &str) -> AddressBookResult<String> {
    let record = ctx
        .address_book()
        .find(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Err(AddressBookError::NoPhones(name.to_string()));
    }

    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}'s phone number is {}.", name, phones))
}

fn show_all(ctx: &CommandContext) -> String {
    let book = ctx.address_book();
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }
    book.records()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(ctx: &mut CommandContext, name: &str, birthday: &str) -> AddressBookResult<String> {
    ctx.address_book_mut()
        .find_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?
        .add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

fn show_birthday(ctx: &CommandContext, name: &str) -> AddressBookResult<String> {
    let birthday = ctx
        .address_book()
        .find(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?
        .birthday()
        .ok_or_else(|| AddressBookError::BirthdayNotSet(name.to_string()))?;
    Ok(format!("{}'s birthday is on {}.", name, birthday))
}

fn birthdays(ctx: &CommandContext) -> String {
    let window = ctx.birthday_window_days();
    let period = match window {
        7 => "the next week".to_string(),
        1 => "the next day".to_string(),
        days => format!("the next {} days", days),
    };

    let upcoming = upcoming_birthdays(ctx.address_book(), ctx.today(), window);
    if upcoming.is_empty() {
        return format!("No birthdays in {}.", period);
    }

    let lines = upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("Birthdays in {}:\n{}", period, lines)
}
