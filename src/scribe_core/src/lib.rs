pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    blog::{Blog, BlogFilter, DateRange, NewBlog},
    claims::{Claims, TokenKind, TokenPair},
    comment::{Comment, CommentFilter, NewComment},
    email::Email,
    ids::{BlogId, CommentId, UserId},
    password::Password,
    reset_token::{ResetToken, ResetTokenError},
    user::{AccountRole, NewUser, ProfileUpdate, Registration, User, UserError, UserFilter},
};

pub use ports::{
    repositories::{
        BlogRepository, CommentRepository, Repository, RepositoryError, ResetTokenStore,
        ResetTokenStoreError, UserRepository,
    },
    services::{EmailClient, HashingError, PasswordHasher, ResetNotifier, TokenCodec, TokenError},
};

pub use strategies::auth_validator::AuthValidator;
