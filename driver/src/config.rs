use error_stack::ResultExt;
use vodca::References;

use kernel::prelude::entity::{BorrowLimit, Library, LibraryName};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static LIBRARY_NAME: &str = "LIBRARY_NAME";
static LIBRARY_DEFAULT_BORROW_LIMIT: &str = "LIBRARY_DEFAULT_BORROW_LIMIT";

static DEFAULT_LIBRARY_NAME: &str = "Library";

#[derive(Debug, Clone, References)]
pub struct LibraryConfig {
    name: String,
    default_borrow_limit: BorrowLimit,
}

impl LibraryConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(env)
    }

    fn from_lookup<F>(lookup: F) -> error_stack::Result<Self, KernelError>
    where
        F: Fn(&str) -> Result<Option<String>, DriverError>,
    {
        let name = lookup(LIBRARY_NAME).convert_error()?.unwrap_or_else(|| {
            tracing::debug!("{LIBRARY_NAME} is not set, using '{DEFAULT_LIBRARY_NAME}'");
            DEFAULT_LIBRARY_NAME.to_string()
        });
        let default_borrow_limit = match lookup(LIBRARY_DEFAULT_BORROW_LIMIT).convert_error()? {
            None => BorrowLimit::default(),
            Some(raw) => {
                let limit = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|source| DriverError::Parse {
                        key: LIBRARY_DEFAULT_BORROW_LIMIT.to_string(),
                        source,
                    })
                    .convert_error()?;
                BorrowLimit::new(limit)
                    .attach_printable_lazy(|| format!("Invalid {LIBRARY_DEFAULT_BORROW_LIMIT}"))?
            }
        };
        Ok(Self {
            name,
            default_borrow_limit,
        })
    }

    pub fn create_library(&self) -> Library {
        Library::new(LibraryName::new(self.name.clone()))
            .with_default_borrow_limit(self.default_borrow_limit)
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LIBRARY_NAME.to_string(),
            default_borrow_limit: BorrowLimit::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use kernel::KernelError;

    use crate::config::LibraryConfig;
    use crate::error::DriverError;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<Option<String>, DriverError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| -> Result<Option<String>, DriverError> { Ok(vars.get(key).cloned()) }
    }

    #[test]
    fn defaults_when_unset() {
        let config = LibraryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.name(), "Library");
        assert_eq!(config.default_borrow_limit().as_ref(), &5);
    }

    #[test]
    fn reads_values() {
        let config = LibraryConfig::from_lookup(lookup(&[
            ("LIBRARY_NAME", "City Central Library"),
            ("LIBRARY_DEFAULT_BORROW_LIMIT", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.default_borrow_limit().as_ref(), &3);

        let library = config.create_library();
        assert_eq!(library.name().as_ref(), "City Central Library");
        assert_eq!(library.default_borrow_limit().as_ref(), &3);
        assert_eq!(library.total_books(), 0);
    }

    #[test]
    fn rejects_bad_limits() {
        let err = LibraryConfig::from_lookup(lookup(&[("LIBRARY_DEFAULT_BORROW_LIMIT", "five")]))
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Internal);

        let err = LibraryConfig::from_lookup(lookup(&[("LIBRARY_DEFAULT_BORROW_LIMIT", "0")]))
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::Validation);
    }
}
