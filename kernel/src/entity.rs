mod book;
mod common;
mod library;
mod member;

pub use self::{book::*, common::*, library::*, member::*};
