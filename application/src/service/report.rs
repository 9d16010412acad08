use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::LibrarySummaryDto;

#[async_trait::async_trait]
pub trait ReportService: 'static + Sync + Send + DependOnLibrary {
    async fn get_summary(&self) -> error_stack::Result<LibrarySummaryDto, KernelError> {
        let library = self.library().lock().await;
        Ok(LibrarySummaryDto::from(&*library))
    }
}

impl<T> ReportService for T where T: DependOnLibrary {}
