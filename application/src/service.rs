mod book;
mod catalog;
mod checkout;
mod member;
mod report;
#[cfg(test)]
mod test_module;

use tokio::sync::Mutex;

use kernel::prelude::entity::Library;

pub use self::{book::*, catalog::*, checkout::*, member::*, report::*};

/// Access to the one lock guarding a [`Library`].
///
/// Every service runs its library work inside a single critical section of
/// this lock, which keeps availability and held sets consistent under
/// concurrent callers.
pub trait DependOnLibrary: 'static + Sync + Send {
    fn library(&self) -> &Mutex<Library>;
}
