use kernel::prelude::entity::Library;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LibrarySummaryDto {
    pub name: String,
    pub total_books: usize,
    pub available_books: usize,
    pub total_members: usize,
}

impl From<&Library> for LibrarySummaryDto {
    fn from(value: &Library) -> Self {
        Self {
            name: value.name().as_ref().clone(),
            total_books: value.total_books(),
            available_books: value.available_count(),
            total_members: value.total_members(),
        }
    }
}
