use kernel::prelude::entity::{Member, MemberEmail, MemberId, MemberName};
use kernel::KernelError;

use crate::service::DependOnLibrary;
use crate::transfer::{CreateMemberDto, GetMemberDto, MemberDto, UpdateMemberDto};

#[async_trait::async_trait]
pub trait GetMemberService: 'static + Sync + Send + DependOnLibrary {
    async fn get_member(
        &self,
        dto: GetMemberDto,
    ) -> error_stack::Result<Option<MemberDto>, KernelError> {
        let library = self.library().lock().await;
        let id = MemberId::new(dto.id);
        Ok(library.find_member(&id).cloned().map(MemberDto::from))
    }
}

impl<T> GetMemberService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait RegisterMemberService: 'static + Sync + Send + DependOnLibrary {
    async fn register_member(&self, dto: CreateMemberDto) -> error_stack::Result<(), KernelError> {
        let mut member = Member::new(
            MemberId::new(dto.id),
            MemberName::new(dto.name),
            MemberEmail::new(dto.email)?,
        )?;
        let id = member.id().clone();

        let mut library = self.library().lock().await;
        let limit = dto
            .borrow_limit
            .unwrap_or(*library.default_borrow_limit().as_ref());
        member.set_borrow_limit(limit)?;
        library.register_member(member)?;
        tracing::info!("Registered member {id} with borrow limit {limit}");

        Ok(())
    }
}

impl<T> RegisterMemberService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait UpdateMemberService: 'static + Sync + Send + DependOnLibrary {
    /// Applies both changes or neither.
    async fn update_member(&self, dto: UpdateMemberDto) -> error_stack::Result<(), KernelError> {
        let id = MemberId::new(dto.id);
        if let Some(email) = &dto.email {
            MemberEmail::new(email.clone())?;
        }

        let mut library = self.library().lock().await;
        if let Some(limit) = dto.borrow_limit {
            library.change_member_borrow_limit(&id, limit)?;
        }
        if let Some(email) = dto.email {
            library.change_member_email(&id, email)?;
        }
        tracing::info!("Updated member {id}");

        Ok(())
    }
}

impl<T> UpdateMemberService for T where T: DependOnLibrary {}
