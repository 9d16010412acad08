use error_stack::ResultExt;

use kernel::interface::store::{CatalogStore, DependOnCatalogStore};
use kernel::KernelError;

use crate::service::DependOnLibrary;

#[async_trait::async_trait]
pub trait CatalogService: 'static + Sync + Send + DependOnLibrary + DependOnCatalogStore {
    /// Adds every stored book to the library, or none of them.
    ///
    /// Held sets are not part of the catalog, so stored books come back
    /// available.
    async fn load_catalog(&self) -> error_stack::Result<usize, KernelError> {
        let books = self.catalog_store().load_catalog().await?;
        let count = books.len();

        let mut library = self.library().lock().await;
        let mut staged = library.clone();
        for mut book in books {
            let id = book.id().clone();
            if !book.is_available() {
                tracing::debug!("Book {id} was stored checked out, restoring it as available");
                book.return_book()?;
            }
            staged
                .add_book(book)
                .attach_printable_lazy(|| format!("Rejected catalog entry {id}"))?;
        }
        *library = staged;
        tracing::info!("Loaded {count} books into {}", library.name().as_ref());

        Ok(count)
    }

    async fn save_catalog(&self) -> error_stack::Result<usize, KernelError> {
        let books = self.library().lock().await.books().clone();
        self.catalog_store().save_catalog(&books).await?;
        tracing::info!("Saved {} books", books.len());
        Ok(books.len())
    }
}

impl<T> CatalogService for T where T: DependOnLibrary + DependOnCatalogStore {}
