//! A small line-oriented library inventory.
//!
//! Each input line is a comma-separated command such as `AddBook,Dune,Frank Herbert,Ace,1965`
//! or `BorrowBook,Dune,Alice`. The [`Interpreter`] applies commands in order to an
//! in-memory [`Inventory`] and answers every line with a short text response.
//! The [`report`] module wraps that in the batch driver that turns an input file
//! into an output report.
//!
//! Failures at the command level (unknown keyword, missing book or member) are part
//! of the response text. Only file I/O produces errors.

pub mod command;
pub mod entity;
mod interpreter;
pub mod inventory;
pub mod report;

/// Re-exports of the types most callers need.
pub use entity::{Book, BookId, Member, MemberId};
pub use interpreter::Interpreter;
pub use inventory::Inventory;
