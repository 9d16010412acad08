use crate::entity::Book;
use crate::KernelError;

/// Capability for loading and saving the book catalog.
///
/// The kernel never calls this itself; services read the catalog through it
/// and hand the books to [`crate::entity::Library`].
#[async_trait::async_trait]
pub trait CatalogStore: 'static + Sync + Send {
    async fn load_catalog(&self) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn save_catalog(&self, books: &[Book]) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCatalogStore: 'static + Sync + Send {
    type CatalogStore: CatalogStore;
    fn catalog_store(&self) -> &Self::CatalogStore;
}
