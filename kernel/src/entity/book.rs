mod author;
mod id;
mod published_year;
mod title;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use destructure::Destructure;
use error_stack::Report;
use serde::{Deserialize, Deserializer, Serialize};
use vodca::References;

pub use self::{author::*, id::*, published_year::*, title::*};
use crate::entity::common::IsAvailable;
use crate::KernelError;

#[derive(Debug, Clone, Serialize, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    published_year: PublishedYear,
    available: IsAvailable<Book>,
}

impl Book {
    /// Creates a book that is available for checkout.
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        published_year: PublishedYear,
    ) -> error_stack::Result<Self, KernelError> {
        if id.as_ref().trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Book id must not be empty"));
        }
        if title.as_ref().trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Book {id} must have a title")));
        }
        Ok(Self {
            id,
            title,
            author,
            published_year,
            available: IsAvailable::new(true),
        })
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    pub fn checkout(&mut self) -> error_stack::Result<(), KernelError> {
        if !self.is_available() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Book {} is already checked out", self.id)));
        }
        self.available = IsAvailable::new(false);
        Ok(())
    }

    pub fn return_book(&mut self) -> error_stack::Result<(), KernelError> {
        if self.is_available() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Book {} is already available", self.id)));
        }
        self.available = IsAvailable::new(true);
        Ok(())
    }
}

// Stored books pass through the same checks as `Book::new`.
#[derive(Deserialize)]
struct BookRow {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    published_year: PublishedYear,
    available: bool,
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let row = BookRow::deserialize(deserializer)?;
        let mut book = Book::new(row.id, row.title, row.author, row.published_year)
            .map_err(<D::Error as serde::de::Error>::custom)?;
        book.available = IsAvailable::new(row.available);
        Ok(book)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book{{isbn='{}', title='{}', author='{}', year={}, available={}}}",
            self.id,
            self.title.as_ref(),
            self.author.as_ref(),
            self.published_year.as_ref(),
            self.is_available()
        )
    }
}
