use nutype::nutype;
use thiserror::Error;

/// Contact form submission exactly as received from the client.
///
/// Every field is optional at this level so that the relay decides which ones
/// are missing instead of the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub purpose: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub purpose: Option<ContactMessagePurpose>,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    /// Reply-to address, only checked for presence.
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactMessagePurpose(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required fields")]
pub struct MissingFieldsError;

impl TryFrom<ContactRequest> for ContactMessage {
    type Error = MissingFieldsError;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        fn required<T: TryFrom<String>>(value: Option<String>) -> Result<T, MissingFieldsError> {
            value
                .and_then(|x| T::try_from(x).ok())
                .ok_or(MissingFieldsError)
        }

        Ok(Self {
            author: ContactMessageAuthor {
                name: required(value.name)?,
                email: required(value.email)?,
            },
            purpose: value
                .purpose
                .and_then(|x| ContactMessagePurpose::try_from(x).ok()),
            content: required(value.message)?,
        })
    }
}
