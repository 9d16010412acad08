use error_stack::Report;

use kernel::interface::notify::{DependOnNotifier, Notifier};
use kernel::prelude::entity::{BookId, Library, MemberEmail, MemberId};
use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::CheckoutDto;

#[async_trait::async_trait]
pub trait CheckoutService: 'static + Sync + Send + DependOnLibrary + DependOnNotifier {
    async fn checkout_book(&self, dto: CheckoutDto) -> error_stack::Result<(), KernelError> {
        let member_id = MemberId::new(dto.member_id);
        let book_id = BookId::new(dto.book_id);

        let (contact, title) = {
            let mut library = self.library().lock().await;
            library.checkout(&member_id, &book_id)?;
            receipt(&library, &member_id, &book_id)?
        };
        tracing::info!("Member {member_id} checked out book {book_id}");

        let message = format!("You have checked out '{title}'");
        send_notification(self.notifier(), &member_id, &contact, &message).await;
        Ok(())
    }
}

impl<T> CheckoutService for T where T: DependOnLibrary + DependOnNotifier {}

#[async_trait::async_trait]
pub trait ReturnService: 'static + Sync + Send + DependOnLibrary + DependOnNotifier {
    async fn return_book(&self, dto: CheckoutDto) -> error_stack::Result<(), KernelError> {
        let member_id = MemberId::new(dto.member_id);
        let book_id = BookId::new(dto.book_id);

        let (contact, title) = {
            let mut library = self.library().lock().await;
            library.return_book(&member_id, &book_id)?;
            receipt(&library, &member_id, &book_id)?
        };
        tracing::info!("Member {member_id} returned book {book_id}");

        let message = format!("You have returned '{title}'");
        send_notification(self.notifier(), &member_id, &contact, &message).await;
        Ok(())
    }
}

impl<T> ReturnService for T where T: DependOnLibrary + DependOnNotifier {}

fn receipt(
    library: &Library,
    member_id: &MemberId,
    book_id: &BookId,
) -> error_stack::Result<(MemberEmail, String), KernelError> {
    let member = library.find_member(member_id).ok_or_else(|| {
        Report::new(KernelError::Internal)
            .attach_printable(format!("Member {member_id} vanished during transaction"))
    })?;
    let book = library.find_book(book_id).ok_or_else(|| {
        Report::new(KernelError::Internal)
            .attach_printable(format!("Book {book_id} vanished during transaction"))
    })?;
    Ok((member.email().clone(), book.title().as_ref().clone()))
}

// The transaction is already committed, so a failed notification is only logged.
async fn send_notification<N: Notifier>(
    notifier: &N,
    member_id: &MemberId,
    contact: &MemberEmail,
    message: &str,
) {
    if let Err(report) = notifier.notify(contact, message).await {
        tracing::warn!("Failed to notify member {member_id}: {report:?}");
    }
}
