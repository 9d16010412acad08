use error_stack::Report;
use tokio::sync::Mutex;

use driver::store::InMemoryCatalogStore;
use kernel::interface::notify::{DependOnNotifier, Notifier};
use kernel::interface::store::DependOnCatalogStore;
use kernel::prelude::entity::{Library, LibraryName, MemberEmail};
use kernel::KernelError;

use crate::service::DependOnLibrary;

/// Records notifications, or fails every one of them when `failing` is set.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    failing: bool,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub(crate) async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        contact: &MemberEmail,
        message: &str,
    ) -> error_stack::Result<(), KernelError> {
        if self.failing {
            return Err(Report::new(KernelError::Internal).attach_printable("mailbox unreachable"));
        }
        self.sent
            .lock()
            .await
            .push((contact.as_ref().clone(), message.to_string()));
        Ok(())
    }
}

pub(crate) struct TestModule {
    library: Mutex<Library>,
    store: InMemoryCatalogStore,
    notifier: RecordingNotifier,
}

impl TestModule {
    pub(crate) fn new() -> Self {
        Self::with_store(InMemoryCatalogStore::default())
    }

    pub(crate) fn with_store(store: InMemoryCatalogStore) -> Self {
        Self {
            library: Mutex::new(Library::new(LibraryName::new("Test Library"))),
            store,
            notifier: RecordingNotifier::default(),
        }
    }

    pub(crate) fn with_library(library: Library) -> Self {
        Self {
            library: Mutex::new(library),
            ..Self::new()
        }
    }

    pub(crate) fn with_failing_notifier() -> Self {
        Self {
            notifier: RecordingNotifier {
                failing: true,
                ..RecordingNotifier::default()
            },
            ..Self::new()
        }
    }
}

impl DependOnLibrary for TestModule {
    fn library(&self) -> &Mutex<Library> {
        &self.library
    }
}

impl DependOnCatalogStore for TestModule {
    type CatalogStore = InMemoryCatalogStore;
    fn catalog_store(&self) -> &Self::CatalogStore {
        &self.store
    }
}

impl DependOnNotifier for TestModule {
    type Notifier = RecordingNotifier;
    fn notifier(&self) -> &Self::Notifier {
        &self.notifier
    }
}
