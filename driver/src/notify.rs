use kernel::interface::notify::Notifier;
use kernel::prelude::entity::MemberEmail;
use kernel::KernelError;

/// Emits every notification as a `tracing` event instead of delivering it.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn notify(
        &self,
        contact: &MemberEmail,
        message: &str,
    ) -> error_stack::Result<(), KernelError> {
        tracing::info!(contact = %contact.as_ref(), "{message}");
        Ok(())
    }
}
