//! Parsing of a single comma-separated command line into a [`Command`].
//!
//! Fields are split on a literal `,` and used verbatim: no trimming, quoting or
//! escaping. The first field selects the operation (case-sensitive).

use thiserror::Error;

/// Field separator of a command line.
pub const FIELD_SEPARATOR: char = ',';

/// Bibliographic fields shared by `AddBook` and `DonateBook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookFields<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub publisher: &'a str,
    pub publication_date: &'a str,
}

/// One parsed command line. Fields borrow from the line they were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `AddBook,title,author,publisher,date`
    AddBook(BookFields<'a>),
    /// `SignUp,name`
    SignUp { name: &'a str },
    /// `SignIn,name`
    SignIn { name: &'a str },
    /// `BorrowBook,title,name`
    BorrowBook { title: &'a str, name: &'a str },
    /// `ReturnBook,title,name`
    ReturnBook { title: &'a str, name: &'a str },
    /// `DonateBook,title,author,publisher,date`
    DonateBook(BookFields<'a>),
    /// `PrintInventory`
    PrintInventory,
    /// `PRINT_MEMBERS`
    PrintMembers,
    /// Any keyword not listed above, including the empty string.
    Unknown { operation: &'a str },
}

/// Errors that can occur while turning a line into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    /// The keyword was recognised but the line carries fewer arguments than it needs.
    #[error("{operation}: expected {expected} argument(s), found {found}")]
    MissingField {
        operation: String,
        expected: usize,
        found: usize,
    },
}

impl ParsingError {
    /// The operation keyword of the rejected line.
    pub fn operation(&self) -> &str {
        match self {
            Self::MissingField { operation, .. } => operation,
        }
    }
}

impl<'a> Command<'a> {
    /// Parse one line. Unknown keywords are not an error; they yield [`Command::Unknown`].
    /// Extra trailing fields are ignored.
    pub fn parse(line: &'a str) -> Result<Self, ParsingError> {
        let mut fields = line.split(FIELD_SEPARATOR);
        // `split` always yields at least one item, even for an empty line
        let operation = fields.next().unwrap_or_default();
        let args: Vec<&'a str> = fields.collect();

        let command = match operation {
            "AddBook" => Self::AddBook(book_fields(operation, &args)?),
            "DonateBook" => Self::DonateBook(book_fields(operation, &args)?),
            "SignUp" => {
                let [name] = take::<1>(operation, &args)?;
                Self::SignUp { name }
            }
            "SignIn" => {
                let [name] = take::<1>(operation, &args)?;
                Self::SignIn { name }
            }
            "BorrowBook" => {
                let [title, name] = take::<2>(operation, &args)?;
                Self::BorrowBook { title, name }
            }
            "ReturnBook" => {
                let [title, name] = take::<2>(operation, &args)?;
                Self::ReturnBook { title, name }
            }
            "PrintInventory" => Self::PrintInventory,
            "PRINT_MEMBERS" => Self::PrintMembers,
            _ => Self::Unknown { operation },
        };
        Ok(command)
    }

    /// The keyword this command is spelled with on the input line.
    pub fn operation(&self) -> &'a str {
        match self {
            Self::AddBook(_) => "AddBook",
            Self::SignUp { .. } => "SignUp",
            Self::SignIn { .. } => "SignIn",
            Self::BorrowBook { .. } => "BorrowBook",
            Self::ReturnBook { .. } => "ReturnBook",
            Self::DonateBook(_) => "DonateBook",
            Self::PrintInventory => "PrintInventory",
            Self::PrintMembers => "PRINT_MEMBERS",
            Self::Unknown { operation } => *operation,
        }
    }
}

fn book_fields<'a>(operation: &str, args: &[&'a str]) -> Result<BookFields<'a>, ParsingError> {
    let [title, author, publisher, publication_date] = take::<4>(operation, args)?;
    Ok(BookFields {
        title,
        author,
        publisher,
        publication_date,
    })
}

/// Take the first `N` positional arguments, or fail if there are fewer.
fn take<'a, const N: usize>(
    operation: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParsingError> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or_else(|| ParsingError::MissingField {
            operation: operation.to_string(),
            expected: N,
            found: args.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_book() {
        let cmd = Command::parse("AddBook,Dune,Frank Herbert,Ace,1965").unwrap();
        assert_eq!(
            cmd,
            Command::AddBook(BookFields {
                title: "Dune",
                author: "Frank Herbert",
                publisher: "Ace",
                publication_date: "1965",
            })
        );
    }

    #[test]
    fn test_parse_keeps_fields_verbatim() {
        let cmd = Command::parse("BorrowBook, Dune ,\"Alice\"").unwrap();
        assert_eq!(
            cmd,
            Command::BorrowBook {
                title: " Dune ",
                name: "\"Alice\"",
            }
        );
    }

    #[test]
    fn test_parse_two_field_commands() {
        assert_eq!(
            Command::parse("ReturnBook,Dune,Alice").unwrap(),
            Command::ReturnBook {
                title: "Dune",
                name: "Alice"
            }
        );
        assert_eq!(
            Command::parse("SignUp,Alice").unwrap(),
            Command::SignUp { name: "Alice" }
        );
        assert_eq!(
            Command::parse("SignIn,Alice").unwrap(),
            Command::SignIn { name: "Alice" }
        );
    }

    #[test]
    fn test_parse_listing_commands_ignore_extra_fields() {
        assert_eq!(
            Command::parse("PrintInventory").unwrap(),
            Command::PrintInventory
        );
        assert_eq!(
            Command::parse("PrintInventory,whatever").unwrap(),
            Command::PrintInventory
        );
        assert_eq!(
            Command::parse("PRINT_MEMBERS").unwrap(),
            Command::PrintMembers
        );
    }

    #[test]
    fn test_parse_keyword_is_case_sensitive() {
        assert_eq!(
            Command::parse("addbook,Dune,a,b,c").unwrap(),
            Command::Unknown {
                operation: "addbook"
            }
        );
        assert_eq!(
            Command::parse("PrintMembers").unwrap(),
            Command::Unknown {
                operation: "PrintMembers"
            }
        );
    }

    #[test]
    fn test_parse_empty_line_is_unknown_with_empty_operation() {
        assert_eq!(
            Command::parse("").unwrap(),
            Command::Unknown { operation: "" }
        );
    }

    #[test]
    fn test_parse_missing_fields() {
        let err = Command::parse("AddBook,Dune,Frank Herbert").unwrap_err();
        assert_eq!(
            err,
            ParsingError::MissingField {
                operation: "AddBook".to_string(),
                expected: 4,
                found: 2,
            }
        );
        assert_eq!(err.operation(), "AddBook");
        assert_eq!(err.to_string(), "AddBook: expected 4 argument(s), found 2");

        assert!(Command::parse("SignUp").is_err());
        assert!(Command::parse("BorrowBook,Dune").is_err());
    }

    #[test]
    fn test_empty_fields_still_count() {
        assert_eq!(
            Command::parse("SignUp,").unwrap(),
            Command::SignUp { name: "" }
        );
    }

    #[test]
    fn test_operation_round_trips_keyword() {
        for line in [
            "AddBook,a,b,c,d",
            "DonateBook,a,b,c,d",
            "SignUp,a",
            "SignIn,a",
            "BorrowBook,a,b",
            "ReturnBook,a,b",
            "PrintInventory",
            "PRINT_MEMBERS",
            "Nope",
        ] {
            let cmd = Command::parse(line).unwrap();
            assert_eq!(Some(cmd.operation()), line.split(',').next());
        }
    }
}
