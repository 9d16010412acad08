mod borrow_limit;
mod email;
mod id;
mod name;

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use destructure::{Destructure, Mutation};
use error_stack::Report;
use serde::Serialize;
use vodca::References;

pub use self::{borrow_limit::*, email::*, id::*, name::*};
use crate::entity::{Book, BookId};
use crate::KernelError;

#[derive(Debug, Clone, Serialize, References, Destructure, Mutation)]
pub struct Member {
    id: MemberId,
    name: MemberName,
    email: MemberEmail,
    borrowed: HashSet<BookId>,
    borrow_limit: BorrowLimit,
}

impl Member {
    pub fn new(
        id: MemberId,
        name: MemberName,
        email: MemberEmail,
    ) -> error_stack::Result<Self, KernelError> {
        if id.as_ref().trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Member id must not be empty"));
        }
        Ok(Self {
            id,
            name,
            email,
            borrowed: HashSet::new(),
            borrow_limit: BorrowLimit::default(),
        })
    }

    pub fn can_borrow_more(&self) -> bool {
        self.borrow_limit.allows(self.borrowed.len())
    }

    pub fn is_holding(&self, book_id: &BookId) -> bool {
        self.borrowed.contains(book_id)
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    pub fn borrowed_books(&self) -> Vec<BookId> {
        self.borrowed.iter().cloned().collect()
    }

    /// Checks the book out and records it as held.
    ///
    /// Every rule is checked before anything changes: a failing
    /// [`Book::checkout`] leaves the held set untouched.
    pub fn borrow(&mut self, book: &mut Book) -> error_stack::Result<(), KernelError> {
        if !self.can_borrow_more() {
            return Err(Report::new(KernelError::LimitExceeded).attach_printable(format!(
                "Member {} has reached the borrow limit of {}",
                self.id,
                self.borrow_limit.as_ref()
            )));
        }
        if self.is_holding(book.id()) {
            return Err(Report::new(KernelError::DuplicateHold).attach_printable(format!(
                "Member {} already holds book {}",
                self.id,
                book.id()
            )));
        }
        book.checkout()?;
        self.borrowed.insert(book.id().clone());
        Ok(())
    }

    pub fn return_book(&mut self, book: &mut Book) -> error_stack::Result<(), KernelError> {
        if !self.is_holding(book.id()) {
            return Err(Report::new(KernelError::NotHeld).attach_printable(format!(
                "Member {} did not borrow book {}",
                self.id,
                book.id()
            )));
        }
        book.return_book()?;
        self.borrowed.remove(book.id());
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> error_stack::Result<(), KernelError> {
        let email = MemberEmail::new(email)?;
        self.substitute(|member| *member.email = email);
        Ok(())
    }

    /// Limits below the number of currently held books are rejected.
    pub fn set_borrow_limit(&mut self, limit: i32) -> error_stack::Result<(), KernelError> {
        let limit = BorrowLimit::new(limit)?;
        if !limit.covers(self.borrowed.len()) {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Member {} holds {} books, more than the requested limit of {}",
                self.id,
                self.borrowed.len(),
                limit.as_ref()
            )));
        }
        self.substitute(|member| *member.borrow_limit = limit);
        Ok(())
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Member{{id='{}', name='{}', email='{}', borrowed={}/{}}}",
            self.id,
            self.name.as_ref(),
            self.email.as_ref(),
            self.borrowed.len(),
            self.borrow_limit.as_ref()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Book, BookAuthor, BookId, BookTitle, Member, MemberEmail, MemberId, MemberName,
        PublishedYear,
    };
    use crate::KernelError;

    fn book(id: &str) -> Book {
        Book::new(
            BookId::new(id),
            BookTitle::new(format!("Title of {id}")),
            BookAuthor::new("Anonymous"),
            PublishedYear::new(2000),
        )
        .unwrap()
    }

    fn alice() -> Member {
        Member::new(
            MemberId::new("M001"),
            MemberName::new("Alice Johnson"),
            MemberEmail::new("alice@example.com").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_member_defaults() {
        let member = alice();
        assert_eq!(member.borrowed_count(), 0);
        assert_eq!(member.borrow_limit().as_ref(), &5);
        assert!(member.can_borrow_more());
    }

    #[test]
    fn rejects_blank_id() {
        let err = Member::new(
            MemberId::new(""),
            MemberName::new("Nobody"),
            MemberEmail::new("nobody@example.com").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Validation);
    }

    #[test]
    fn borrow_and_return() {
        let mut member = alice();
        let mut book = book("I1");
        member.borrow(&mut book).unwrap();
        assert!(!book.is_available());
        assert!(member.is_holding(book.id()));
        assert_eq!(member.borrowed_books(), vec![BookId::new("I1")]);

        member.return_book(&mut book).unwrap();
        assert!(book.is_available());
        assert_eq!(member.borrowed_count(), 0);
    }

    #[test]
    fn limit_boundary() {
        let mut member = alice();
        member.set_borrow_limit(2).unwrap();
        let mut first = book("I1");
        let mut second = book("I2");
        let mut third = book("I3");

        member.borrow(&mut first).unwrap();
        // one below the limit still succeeds
        member.borrow(&mut second).unwrap();
        assert!(!member.can_borrow_more());

        let err = member.borrow(&mut third).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::LimitExceeded);
        assert!(third.is_available());
        assert_eq!(member.borrowed_count(), 2);
    }

    #[test]
    fn duplicate_hold_is_rejected() {
        let mut member = alice();
        let mut book = book("I1");
        member.borrow(&mut book).unwrap();
        let err = member.borrow(&mut book).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::DuplicateHold);
        assert_eq!(member.borrowed_count(), 1);
    }

    #[test]
    fn failed_checkout_leaves_held_set_untouched() {
        let mut member = alice();
        let mut book = book("I1");
        book.checkout().unwrap();

        let err = member.borrow(&mut book).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::InvalidState);
        assert_eq!(member.borrowed_count(), 0);
    }

    #[test]
    fn return_of_unheld_book() {
        let mut member = alice();
        let mut book = book("I1");
        book.checkout().unwrap();
        let err = member.return_book(&mut book).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::NotHeld);
        assert!(!book.is_available());
    }

    #[test]
    fn email_update_is_validated() {
        let mut member = alice();
        let err = member.set_email("alice.example.com").unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Validation);
        assert_eq!(member.email().as_ref(), "alice@example.com");

        member.set_email("alice@library.org").unwrap();
        assert_eq!(member.email().as_ref(), "alice@library.org");
    }

    #[test]
    fn borrow_limit_update_is_validated() {
        let mut member = alice();
        for invalid in [0, -3] {
            let err = member.set_borrow_limit(invalid).unwrap_err();
            assert_eq!(err.current_context(), &KernelError::Validation);
        }

        let mut first = book("I1");
        let mut second = book("I2");
        member.borrow(&mut first).unwrap();
        member.borrow(&mut second).unwrap();
        let err = member.set_borrow_limit(1).unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Validation);
        assert_eq!(member.borrow_limit().as_ref(), &5);

        member.set_borrow_limit(2).unwrap();
        assert!(!member.can_borrow_more());
    }

    #[test]
    fn display() {
        assert_eq!(
            alice().to_string(),
            "Member{id='M001', name='Alice Johnson', email='alice@example.com', borrowed=0/5}"
        );
    }
}
