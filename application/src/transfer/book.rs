use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub available: bool,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            published_year,
            available,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            published_year: published_year.into(),
            available: available.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct GetBooksByAuthorDto {
    pub author: String,
}

pub struct CreateBookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

pub struct DeleteBookDto {
    pub id: String,
}
