use tokio::sync::RwLock;

use kernel::interface::store::CatalogStore;
use kernel::prelude::entity::Book;
use kernel::KernelError;

/// Keeps the last saved catalog in memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    catalog: RwLock<Vec<Book>>,
}

impl InMemoryCatalogStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            catalog: RwLock::new(books),
        }
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn load_catalog(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let catalog = self.catalog.read().await;
        tracing::debug!("Loading {} books from memory", catalog.len());
        Ok(catalog.clone())
    }

    async fn save_catalog(&self, books: &[Book]) -> error_stack::Result<(), KernelError> {
        let mut catalog = self.catalog.write().await;
        tracing::debug!("Saving {} books to memory", books.len());
        *catalog = books.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::store::CatalogStore;
    use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle, PublishedYear};
    use kernel::KernelError;

    use crate::store::InMemoryCatalogStore;

    #[tokio::test]
    async fn saved_catalog_is_a_snapshot() -> error_stack::Result<(), KernelError> {
        let store = InMemoryCatalogStore::default();
        assert!(store.load_catalog().await?.is_empty());

        let mut books = vec![Book::new(
            BookId::new("978-0132350884"),
            BookTitle::new("Clean Code"),
            BookAuthor::new("Robert Martin"),
            PublishedYear::new(2008),
        )?];
        store.save_catalog(&books).await?;
        books[0].checkout()?;

        let loaded = store.load_catalog().await?;
        assert_eq!(loaded, books);
        assert!(loaded[0].is_available());
        Ok(())
    }
}
