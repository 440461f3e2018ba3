use crate::command::{BookFields, Command};
use crate::inventory::{AddOutcome, Inventory};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Write as _;
use std::io::Write;

/// Prompt shown by [`Interpreter::repl`].
pub const PROMPT: &str = "library> ";

/// Placeholder shown for every member; fees are not computed.
const AMOUNT_OWED: &str = "$0.0";

/// Executes library commands against an [`Inventory`] it owns.
///
/// Every call to [`Interpreter::process`] sees the effects of all previous calls.
/// Failures such as an unknown keyword or a missing book are reported in the
/// returned text, never as an error.
///
/// Example
/// ```
/// use library_inventory::Interpreter;
/// let mut lib = Interpreter::default();
/// assert_eq!(lib.process("SignUp,Alice"), "Member signed up: Alice\n");
/// assert_eq!(lib.process("SignIn,Bob"), "Invalid command: SignIn\n");
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    inventory: Inventory,
}

impl Interpreter {
    /// Create an interpreter over an existing inventory.
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run one command line and return its response. The response always ends with
    /// a newline, except for `PRINT_MEMBERS` with no members, which is empty.
    pub fn process(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Ok(command) => {
                tracing::debug!(operation = command.operation(), "processing command");
                self.execute(command)
            }
            Err(err) => {
                tracing::warn!(%err, line, "malformed command");
                invalid(err.operation())
            }
        }
    }

    /// Process `lines` in order and concatenate the responses.
    pub fn run<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) -> String {
        lines.into_iter().map(|line| self.process(line)).collect()
    }

    fn execute(&mut self, command: Command<'_>) -> String {
        match command {
            Command::AddBook(BookFields {
                title,
                author,
                publisher,
                publication_date,
            }) => match self
                .inventory
                .add_book(title, author, publisher, publication_date)
            {
                AddOutcome::Added(book) => format!("Book added: {}\n", book.title()),
                AddOutcome::AlreadyExists(existing) => format!(
                    "Book already exists in the inventory: {}\n",
                    existing.title()
                ),
            },
            Command::DonateBook(BookFields {
                title,
                author,
                publisher,
                publication_date,
            }) => {
                let book = self
                    .inventory
                    .donate_book(title, author, publisher, publication_date);
                format!("Book donated: {} by {}\n", book.title(), book.author())
            }
            Command::SignUp { name } => {
                let member = self.inventory.sign_up(name);
                format!("Member signed up: {}\n", member.name())
            }
            Command::SignIn { name } => match self.inventory.find_member_by_name(name) {
                Some(member) => format!("Member signed in: {}\n", member.name()),
                None => {
                    tracing::warn!(name, "sign-in for unknown member");
                    invalid(command.operation())
                }
            },
            Command::BorrowBook { title, name } => {
                // book lookup takes priority over member lookup
                let Some(book) = self.inventory.find_book_by_title(title).cloned() else {
                    return format!("Book not found: {}\n", title);
                };
                let Some(member) = self.inventory.find_member_by_name_mut(name) else {
                    return format!("Member not found: {}\n", name);
                };
                member.borrow(&book);
                format!("Book borrowed: {}\n", book.title())
            }
            Command::ReturnBook { title, name } => {
                let Some(book) = self.inventory.find_book_by_title(title).cloned() else {
                    return format!("Book not found: {}\n", title);
                };
                let Some(member) = self.inventory.find_member_by_name_mut(name) else {
                    return format!("Member not found: {}\n", name);
                };
                member.unborrow(&book);
                format!("Book returned: {} by {}\n", book.title(), member.name())
            }
            Command::PrintInventory => self.render_inventory(),
            Command::PrintMembers => self.render_members(),
            Command::Unknown { operation } => {
                tracing::warn!(operation, "unknown command");
                invalid(operation)
            }
        }
    }

    fn render_inventory(&self) -> String {
        let mut out = String::from("Inventory:\n");
        for book in self.inventory.list_books() {
            // writing into a String cannot fail
            let _ = write!(
                out,
                "Book: {}\nAuthor: {}\nPublisher: {}\nPublication Date: {}\n\n",
                book.title(),
                book.author(),
                book.publisher(),
                book.publication_date()
            );
        }
        out
    }

    fn render_members(&self) -> String {
        let mut out = String::new();
        for member in self.inventory.list_members() {
            let _ = write!(
                out,
                "Member ID: {}\nMember Name: {}\nAmount Owed: {}\n\n",
                member.id(),
                member.name(),
                AMOUNT_OWED
            );
        }
        out
    }

    /// Interactive Read-Eval-Print Loop over the same inventory.
    ///
    /// Each line is processed as soon as it is entered and its response printed to
    /// stdout. Ctrl-C and Ctrl-D end the session.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let response = self.process(&line);
                    stdout.write_all(response.as_bytes())?;
                    stdout.flush()?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    tracing::info!(
                        books = self.inventory.book_count(),
                        members = self.inventory.member_count(),
                        "session ended"
                    );
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

fn invalid(operation: &str) -> String {
    format!("Invalid command: {}\n", operation)
}
