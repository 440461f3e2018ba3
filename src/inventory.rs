use crate::entity::{Book, BookId, Member, MemberId};

/// Result of [`Inventory::add_book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome<'a> {
    /// A new book was appended to the catalog.
    Added(&'a Book),
    /// A book with the same title is already catalogued; nothing changed.
    AlreadyExists(&'a Book),
}

/// All books and members known during one run.
///
/// Both collections keep insertion order, and ids are derived from the collection
/// size at insertion time, so they are dense and start at 1.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog a book unless one with the exact same title is already present.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        publisher: &str,
        publication_date: &str,
    ) -> AddOutcome<'_> {
        if let Some(pos) = self.books.iter().position(|b| b.title() == title) {
            return AddOutcome::AlreadyExists(&self.books[pos]);
        }
        AddOutcome::Added(self.push_book(title, author, publisher, publication_date))
    }

    /// Catalog a donated book. Donations are never deduplicated.
    pub fn donate_book(
        &mut self,
        title: &str,
        author: &str,
        publisher: &str,
        publication_date: &str,
    ) -> &Book {
        self.push_book(title, author, publisher, publication_date)
    }

    /// Register a new member. Names are not required to be unique.
    pub fn sign_up(&mut self, name: &str) -> &Member {
        let id = MemberId(self.members.len() + 1);
        self.members.push(Member::new(id, name));
        &self.members[self.members.len() - 1]
    }

    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title() == title)
    }

    pub fn find_member_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn find_member_by_name_mut(&mut self, name: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.name() == name)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        id.0.checked_sub(1).and_then(|idx| self.books.get(idx))
    }

    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    pub fn list_members(&self) -> &[Member] {
        &self.members
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn push_book(
        &mut self,
        title: &str,
        author: &str,
        publisher: &str,
        publication_date: &str,
    ) -> &Book {
        let id = BookId(self.books.len() + 1);
        self.books
            .push(Book::new(id, title, author, publisher, publication_date));
        &self.books[self.books.len() - 1]
    }
}
