use thiserror::Error;

/// Error raised while a check predicate reads the manifest.
///
/// This is never a normal check failure: it means the tool could not
/// evaluate the predicate at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Cannot read property '{property}' of {owner}: value is null or missing")]
    NullishAccess { owner: String, property: String },
}

impl CheckError {
    pub fn nullish(owner: impl Into<String>, property: impl Into<String>) -> Self {
        Self::NullishAccess {
            owner: owner.into(),
            property: property.into(),
        }
    }
}
