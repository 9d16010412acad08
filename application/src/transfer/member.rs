use kernel::prelude::entity::{DestructMember, Member};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberDto {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Sorted by book id.
    pub borrowed: Vec<String>,
    pub borrow_limit: i32,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let DestructMember {
            id,
            name,
            email,
            borrowed,
            borrow_limit,
        } = value.into_destruct();
        let mut borrowed = borrowed.into_iter().map(String::from).collect::<Vec<_>>();
        borrowed.sort();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            borrowed,
            borrow_limit: borrow_limit.into(),
        }
    }
}

pub struct GetMemberDto {
    pub id: String,
}

pub struct CreateMemberDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub borrow_limit: Option<i32>,
}

pub struct UpdateMemberDto {
    pub id: String,
    pub email: Option<String>,
    pub borrow_limit: Option<i32>,
}
