use std::{ops::Deref, sync::Arc};

use axum::http::request::Parts;
use scribe_core::{
    AuthValidator, BlogRepository, Claims, CommentRepository, PasswordHasher, ResetNotifier,
    ResetTokenStore, TokenCodec, UserRepository,
};

/// The adapters one running service is built from.
pub trait Ports: Send + Sync + 'static {
    type Users: UserRepository;
    type Blogs: BlogRepository;
    type Comments: CommentRepository;
    type ResetTokens: ResetTokenStore;
    type Hasher: PasswordHasher;
    type Tokens: TokenCodec;
    type Notifier: ResetNotifier;
    type Validator: AuthValidator<Claims = Claims, RequestParts = Parts>;

    fn users(&self) -> &Self::Users;
    fn blogs(&self) -> &Self::Blogs;
    fn comments(&self) -> &Self::Comments;
    fn reset_tokens(&self) -> &Self::ResetTokens;
    fn hasher(&self) -> &Self::Hasher;
    fn tokens(&self) -> &Self::Tokens;
    fn notifier(&self) -> &Self::Notifier;
    fn validator(&self) -> &Self::Validator;
}

/// Router state: one shared set of ports.
pub struct AppState<P> {
    ports: Arc<P>,
}

impl<P> AppState<P> {
    pub fn new(ports: P) -> Self {
        Self {
            ports: Arc::new(ports),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            ports: Arc::clone(&self.ports),
        }
    }
}

impl<P> Deref for AppState<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.ports
    }
}
