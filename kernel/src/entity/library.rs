mod name;

use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::References;

pub use self::name::*;
use crate::entity::{Book, BookId, BorrowLimit, Member, MemberId};
use crate::{EntityKind, KernelError};

/// Aggregate root owning every book and member.
///
/// Availability is never flipped here directly; checkouts and returns are
/// delegated to [`Member`], which keeps its held set and the book in step.
#[derive(Debug, Clone, References)]
pub struct Library {
    name: LibraryName,
    books: Vec<Book>,
    members: Vec<Member>,
    default_borrow_limit: BorrowLimit,
}

impl Library {
    pub fn new(name: LibraryName) -> Self {
        Self {
            name,
            books: Vec::new(),
            members: Vec::new(),
            default_borrow_limit: BorrowLimit::default(),
        }
    }

    /// Limit handed to members registered without an explicit one.
    pub fn with_default_borrow_limit(mut self, limit: BorrowLimit) -> Self {
        self.default_borrow_limit = limit;
        self
    }

    pub fn add_book(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        if self.books.contains(&book) {
            return Err(Report::new(KernelError::DuplicateIdentifier(EntityKind::Book))
                .attach_printable(format!("Book {} already exists in library", book.id())));
        }
        if !book.is_available() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Book {} is checked out by nobody", book.id())));
        }
        self.books.push(book);
        Ok(())
    }

    pub fn remove_book(&mut self, book_id: &BookId) -> error_stack::Result<Book, KernelError> {
        let position = self
            .books
            .iter()
            .position(|book| book.id() == book_id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound(EntityKind::Book))
                    .attach_printable(format!("Book {book_id} not found in library"))
            })?;
        if !self.books[position].is_available() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Cannot remove book {book_id} that is checked out")));
        }
        Ok(self.books.remove(position))
    }

    pub fn register_member(&mut self, member: Member) -> error_stack::Result<(), KernelError> {
        if self.members.contains(&member) {
            return Err(
                Report::new(KernelError::DuplicateIdentifier(EntityKind::Member))
                    .attach_printable(format!("Member {} already registered", member.id())),
            );
        }
        self.members.push(member);
        Ok(())
    }

    pub fn find_member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == member_id)
    }

    pub fn find_book(&self, book_id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == book_id)
    }

    pub fn books_by_author(&self, author: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.author().matches(author))
            .cloned()
            .collect()
    }

    pub fn available_books(&self) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.is_available())
            .cloned()
            .collect()
    }

    pub fn checkout(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let (member, book) = self.resolve(member_id, book_id)?;
        member.borrow(book)
    }

    pub fn return_book(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let (member, book) = self.resolve(member_id, book_id)?;
        member.return_book(book)
    }

    pub fn change_member_email(
        &mut self,
        member_id: &MemberId,
        email: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.member_mut(member_id)?.set_email(email)
    }

    pub fn change_member_borrow_limit(
        &mut self,
        member_id: &MemberId,
        limit: i32,
    ) -> error_stack::Result<(), KernelError> {
        self.member_mut(member_id)?.set_borrow_limit(limit)
    }

    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    pub fn available_count(&self) -> usize {
        self.books.iter().filter(|book| book.is_available()).count()
    }

    pub fn total_members(&self) -> usize {
        self.members.len()
    }

    fn member_mut(&mut self, member_id: &MemberId) -> error_stack::Result<&mut Member, KernelError> {
        self.members
            .iter_mut()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound(EntityKind::Member))
                    .attach_printable(format!("Member {member_id} not found"))
            })
    }

    // member is resolved before the book
    fn resolve(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> error_stack::Result<(&mut Member, &mut Book), KernelError> {
        let member = self
            .members
            .iter_mut()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound(EntityKind::Member))
                    .attach_printable(format!("Member {member_id} not found"))
            })?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id() == book_id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound(EntityKind::Book))
                    .attach_printable(format!("Book {book_id} not found"))
            })?;
        Ok((member, book))
    }
}

impl Display for Library {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Library{{name='{}', books={}, members={}}}",
            self.name.as_ref(),
            self.books.len(),
            self.members.len()
        )
    }
}
