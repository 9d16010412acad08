mod book;
mod checkout;
mod member;
mod report;

pub use self::{book::*, checkout::*, member::*, report::*};
