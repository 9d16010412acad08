use crate::entity::MemberEmail;
use crate::KernelError;

#[async_trait::async_trait]
pub trait Notifier: 'static + Sync + Send {
    async fn notify(
        &self,
        contact: &MemberEmail,
        message: &str,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnNotifier: 'static + Sync + Send {
    type Notifier: Notifier;
    fn notifier(&self) -> &Self::Notifier;
}
