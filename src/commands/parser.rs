//! Turns a line of user input into a typed [`Command`].

use crate::error::{AddressBookError, AddressBookResult};
use std::str::FromStr;

/// A command the assistant understands, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

/// Command keywords without their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Keyword {
    /// Argument names, in order, shown in usage messages.
    fn arguments(self) -> &'static [&'static str] {
        match self {
            Keyword::Add | Keyword::Change => &["name", "phone"],
            Keyword::AddBirthday => &["name", "DD.MM.YYYY"],
            Keyword::Phone | Keyword::ShowBirthday => &["name"],
            Keyword::Hello | Keyword::All | Keyword::Birthdays | Keyword::Exit => &[],
        }
    }

    /// Whether `count` words after the keyword are acceptable.
    ///
    /// `change`, `phone` and `add-birthday` take exactly their arguments.
    /// Every other command ignores whatever follows its own arguments.
    fn accepts(self, count: usize) -> bool {
        let required = self.arguments().len();
        match self {
            Keyword::Change | Keyword::Phone | Keyword::AddBirthday => count == required,
            _ => count >= required,
        }
    }

    /// Usage line spelled with the keyword the user typed, so `close`
    /// is not reported as `exit`.
    fn usage(self, typed: &str) -> String {
        let mut usage = typed.to_lowercase();
        for arg in self.arguments() {
            usage.push_str(&format!(" <{}>", arg));
        }
        usage
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Keyword::Hello),
            "add" => Ok(Keyword::Add),
            "change" => Ok(Keyword::Change),
            "phone" => Ok(Keyword::Phone),
            "all" => Ok(Keyword::All),
            "add-birthday" => Ok(Keyword::AddBirthday),
            "show-birthday" => Ok(Keyword::ShowBirthday),
            "birthdays" => Ok(Keyword::Birthdays),
            "close" | "exit" => Ok(Keyword::Exit),
            _ => Err(()),
        }
    }
}

/// What a line of input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace
    Blank,
    /// First word is not a known command
    Unknown(String),
    /// A complete command
    Command(Command),
}

/// Split a line on whitespace and match it against the command table.
///
/// # Errors
///
/// `InvalidArguments` when a known command is missing arguments, or when
/// `change`, `phone` or `add-birthday` get extra ones.
pub fn parse_input(line: &str) -> AddressBookResult<Input> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Input::Blank);
    };
    let Ok(keyword) = first.parse::<Keyword>() else {
        return Ok(Input::Unknown(first.to_string()));
    };

    let args: Vec<String> = words.map(str::to_string).collect();
    if !keyword.accepts(args.len()) {
        return Err(AddressBookError::InvalidArguments(format!(
            "Usage: {}",
            keyword.usage(first)
        )));
    }

    let mut args = args.into_iter();
    let mut next = || args.next().unwrap_or_default();

    let command = match keyword {
        Keyword::Hello => Command::Hello,
        Keyword::Add => Command::Add {
            name: next(),
            phone: next(),
        },
        Keyword::Change => Command::Change {
            name: next(),
            phone: next(),
        },
        Keyword::Phone => Command::Phone { name: next() },
        Keyword::All => Command::All,
        Keyword::AddBirthday => Command::AddBirthday {
            name: next(),
            birthday: next(),
        },
        Keyword::ShowBirthday => Command::ShowBirthday { name: next() },
        Keyword::Birthdays => Command::Birthdays,
        Keyword::Exit => Command::Exit,
    };

    Ok(Input::Command(command))
}
