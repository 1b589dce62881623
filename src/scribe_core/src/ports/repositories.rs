use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    blog::{Blog, BlogFilter, NewBlog},
    comment::{Comment, CommentFilter, NewComment},
    email::Email,
    ids::{BlogId, CommentId, UserId},
    reset_token::ResetToken,
    user::{NewUser, User, UserFilter},
};

// Repository port trait and errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{}", describe_duplicate(.fields))]
    Duplicate { fields: BTreeMap<String, String> },
    #[error("Record not found")]
    NotFound,
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

fn describe_duplicate(fields: &BTreeMap<String, String>) -> String {
    if fields.is_empty() {
        return "duplicate record".to_owned();
    }

    let pairs = fields
        .iter()
        .map(|(field, value)| format!("{field}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("duplicate record with {{{pairs}}}")
}

impl PartialEq for RepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Duplicate { fields: a }, Self::Duplicate { fields: b }) => a == b,
            (Self::NotFound, Self::NotFound) => true,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// CRUD over one entity kind in the document store.
///
/// `update` is a diff update: only fields of `record` that differ from the
/// stored copy are written, and zero-valued fields count as unchanged. The
/// merged record is returned without a read-back.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send + Sync;
    type Draft: Send;
    type Filter: Send + Sync;
    type Id: Send + Sync;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Record, RepositoryError>;
    async fn find(&self, filter: &Self::Filter) -> Result<Vec<Self::Record>, RepositoryError>;
    async fn find_by_id(&self, id: &Self::Id) -> Result<Self::Record, RepositoryError>;
    async fn update(&self, record: Self::Record) -> Result<Self::Record, RepositoryError>;
    async fn delete(&self, id: &Self::Id) -> Result<(), RepositoryError>;
}

pub trait UserRepository:
    Repository<Record = User, Draft = NewUser, Filter = UserFilter, Id = UserId>
{
}

impl<T> UserRepository for T where
    T: Repository<Record = User, Draft = NewUser, Filter = UserFilter, Id = UserId>
{
}

pub trait BlogRepository:
    Repository<Record = Blog, Draft = NewBlog, Filter = BlogFilter, Id = BlogId>
{
}

impl<T> BlogRepository for T where
    T: Repository<Record = Blog, Draft = NewBlog, Filter = BlogFilter, Id = BlogId>
{
}

pub trait CommentRepository:
    Repository<Record = Comment, Draft = NewComment, Filter = CommentFilter, Id = CommentId>
{
}

impl<T> CommentRepository for T where
    T: Repository<Record = Comment, Draft = NewComment, Filter = CommentFilter, Id = CommentId>
{
}

// ResetTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum ResetTokenStoreError {
    #[error("Reset token not found")]
    TokenNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ResetTokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::TokenNotFound, Self::TokenNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// At most one outstanding reset token per email.
#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    /// Replaces any token already stored for `email`.
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError>;
    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError>;
    /// Deleting an absent token is not an error.
    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError>;
}
