use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EntityKind {
    Book,
    Member,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Book => write!(f, "book"),
            EntityKind::Member => write!(f, "member"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    DuplicateIdentifier(EntityKind),
    NotFound(EntityKind),
    InvalidState,
    LimitExceeded,
    DuplicateHold,
    NotHeld,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::DuplicateIdentifier(kind) => write!(f, "Duplicate {kind} identifier"),
            KernelError::NotFound(kind) => write!(f, "The {kind} was not found"),
            KernelError::InvalidState => write!(f, "Operation not allowed in current state"),
            KernelError::LimitExceeded => write!(f, "Borrow limit reached"),
            KernelError::DuplicateHold => write!(f, "Book already borrowed by this member"),
            KernelError::NotHeld => write!(f, "Member did not borrow this book"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
