pub use crate::error::*;

mod entity;
mod error;
mod notify;
mod store;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod store {
        pub use crate::store::*;
    }
    pub mod notify {
        pub use crate::notify::*;
    }
}
