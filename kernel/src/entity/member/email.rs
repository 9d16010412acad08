use error_stack::Report;
use serde::{Deserialize, Deserializer, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize)]
pub struct MemberEmail(String);

impl MemberEmail {
    /// Accepts any non-empty address containing an `@`.
    pub fn new(email: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let email = email.into();
        if email.trim().is_empty() || !email.contains('@') {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Invalid email address: '{email}'")));
        }
        Ok(Self(email))
    }
}

impl<'de> Deserialize<'de> for MemberEmail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)
            .and_then(|email| MemberEmail::new(email).map_err(serde::de::Error::custom))
    }
}
