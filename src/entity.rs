use std::fmt;

/// Sequential, 1-based identifier of a [`Book`] within one inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub usize);

/// Sequential, 1-based identifier of a [`Member`] within one inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub usize);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    publisher: String,
    publication_date: String,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            publication_date: publication_date.into(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }
}

/// A library member and the books they currently hold.
///
/// Borrowed books are tracked by id; the [`Book`] records themselves stay owned
/// by the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed: Vec<BookId>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the books currently held, in borrow order. May contain repeats.
    pub fn borrowed(&self) -> &[BookId] {
        &self.borrowed
    }

    /// Record that `book` is held by this member. No duplicate check.
    pub fn borrow(&mut self, book: &Book) {
        self.borrowed.push(book.id());
    }

    /// Drop the first held entry for `book`. Returning a book that is not held is a no-op.
    pub fn unborrow(&mut self, book: &Book) {
        if let Some(pos) = self.borrowed.iter().position(|id| *id == book.id()) {
            self.borrowed.remove(pos);
        }
    }
}
