use crate::model::{Book, BookId, NewBook, Record};

const FIRST_BOOK_ID: BookId = 1;

/// Largest id accepted from a document. Larger ids are treated as missing.
const MAX_BOOK_ID: BookId = i64::MAX as BookId;

/// The book catalog and its id counter.
///
/// Ids are handed out in increasing order and never reused, even after the
/// book that held one is removed.
#[derive(Debug, Clone)]
pub struct BookManager {
    books: Vec<Book>,
    next_id: BookId,
}

impl Default for BookManager {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: FIRST_BOOK_ID,
        }
    }
}

impl BookManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book under the next id and return that id.
    pub fn add(&mut self, book: NewBook) -> BookId {
        let id = self.allocate_id();
        self.books.push(book.into_book(id));
        id
    }

    /// Remove the book with this id. Sales that reference it are untouched.
    pub fn remove(&mut self, id: BookId) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        before - self.books.len()
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// First book with exactly this title.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    pub fn serialize(&self) -> Vec<Record> {
        self.books.iter().map(Book::to_record).collect()
    }

    /// Keep the counter above `id`, so a removed book's id is not handed out
    /// again while sales still point at it. Ids above [`MAX_BOOK_ID`] are
    /// ignored.
    pub fn reserve_through(&mut self, id: BookId) {
        if id <= MAX_BOOK_ID {
            self.next_id = self.next_id.max(id + 1);
        }
    }

    /// Replace the catalog with the given records.
    ///
    /// Explicit ids are kept and push the counter past them. Records without
    /// a valid id get fresh ids once every explicit id has been seen.
    pub fn deserialize(&mut self, records: &[Record]) {
        let parsed: Vec<_> = records
            .iter()
            .map(Book::from_record)
            .map(|(id, fields)| (id.filter(|id| *id <= MAX_BOOK_ID), fields))
            .collect();

        for id in parsed.iter().filter_map(|(id, _)| *id) {
            self.reserve_through(id);
        }

        let mut books = Vec::with_capacity(parsed.len());
        for (id, fields) in parsed {
            let id = match id {
                Some(id) => id,
                None => self.allocate_id(),
            };
            books.push(fields.into_book(id));
        }
        self.books = books;
    }

    fn allocate_id(&mut self) -> BookId {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        id
    }
}
