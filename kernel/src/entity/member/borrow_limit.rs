use error_stack::Report;
use serde::{Deserialize, Deserializer, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const DEFAULT_BORROW_LIMIT: i32 = 5;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize)]
pub struct BorrowLimit(i32);

impl BorrowLimit {
    pub fn new(limit: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let limit = limit.into();
        if limit < 1 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Borrow limit must be at least 1, got {limit}")));
        }
        Ok(Self(limit))
    }

    /// Whether `count` held books leave room for one more.
    pub fn allows(&self, count: usize) -> bool {
        usize::try_from(self.0).map_or(false, |limit| count < limit)
    }

    /// Whether `count` held books fit within the limit.
    pub fn covers(&self, count: usize) -> bool {
        usize::try_from(self.0).map_or(false, |limit| count <= limit)
    }
}

impl Default for BorrowLimit {
    fn default() -> Self {
        Self(DEFAULT_BORROW_LIMIT)
    }
}

impl<'de> Deserialize<'de> for BorrowLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer)
            .and_then(|limit| BorrowLimit::new(limit).map_err(serde::de::Error::custom))
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BorrowLimit;

    #[test]
    fn deserialization_is_validated() {
        assert!(serde_json::from_str::<BorrowLimit>("0").is_err());
        assert!(serde_json::from_str::<BorrowLimit>("-2").is_err());
        let limit: BorrowLimit = serde_json::from_str("3").unwrap();
        assert_eq!(limit.as_ref(), &3);
    }

    #[test]
    fn boundaries() {
        let limit = BorrowLimit::new(2).unwrap();
        assert!(limit.allows(1));
        assert!(!limit.allows(2));
        assert!(limit.covers(2));
        assert!(!limit.covers(3));
    }
}
