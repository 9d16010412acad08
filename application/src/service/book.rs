use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle, PublishedYear};
use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, GetBooksByAuthorDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnLibrary {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let library = self.library().lock().await;
        let id = BookId::new(dto.id);
        Ok(library.find_book(&id).cloned().map(BookDto::from))
    }

    async fn get_books_by_author(
        &self,
        dto: GetBooksByAuthorDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let library = self.library().lock().await;
        let books = library.books_by_author(&dto.author);
        tracing::debug!("Found {} books by '{}'", books.len(), dto.author);
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_available_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let library = self.library().lock().await;
        Ok(library
            .available_books()
            .into_iter()
            .map(BookDto::from)
            .collect())
    }
}

impl<T> GetBookService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnLibrary {
    async fn add_book(&self, dto: CreateBookDto) -> error_stack::Result<String, KernelError> {
        let book = Book::new(
            BookId::new(dto.id),
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            PublishedYear::new(dto.published_year),
        )?;
        let id = book.id().as_ref().clone();

        self.library().lock().await.add_book(book)?;
        tracing::info!("Added book {id}");

        Ok(id)
    }
}

impl<T> CreateBookService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnLibrary {
    async fn remove_book(&self, dto: DeleteBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);
        let removed = self.library().lock().await.remove_book(&id)?;
        tracing::info!("Removed book {id}");
        Ok(BookDto::from(removed))
    }
}

impl<T> DeleteBookService for T where T: DependOnLibrary {}
