//! # Scribe - Multi-tenant CMS backend
//!
//! Facade crate re-exporting the public APIs of the scribe workspace.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `Blog`, `Comment`, `Claims`
//! - **Ports**: `UserRepository`, `BlogRepository`, `CommentRepository`, `ResetTokenStore`
//! - **Use cases**: `LoginUseCase`, `ResetPasswordUseCase`, `BlogUseCase`, etc.
//! - **Adapters**: document repositories, reset-token stores, `JwtTokenCodec`, mail clients
//! - **Service**: `ScribeService`, the router entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use scribe_core::*;
}

pub use scribe_core::{
    AccountRole, Blog, BlogId, Claims, Comment, CommentId, Email, Password, ResetToken, TokenKind,
    TokenPair, User, UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and store trait definitions
pub mod repositories {
    pub use scribe_core::{
        BlogRepository, CommentRepository, Repository, RepositoryError, ResetTokenStore,
        ResetTokenStoreError, UserRepository,
    };
}

pub use scribe_core::{
    BlogRepository, CommentRepository, EmailClient, PasswordHasher, RepositoryError,
    ResetNotifier, ResetTokenStore, TokenCodec, UserRepository,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use scribe_application::*;
}

pub use scribe_application::{
    AccountFlagsUseCase, BlogUseCase, ForgotPasswordUseCase, LoginUseCase, RefreshTokensUseCase,
    RegisterUseCase, ResetPasswordUseCase, UserDirectoryUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and request context
    pub mod http {
        pub use scribe_adapters::http::*;
    }

    /// Document store drivers, repositories and reset-token stores
    pub mod persistence {
        pub use scribe_adapters::persistence::*;
    }

    /// Email clients and the reset notifier
    pub mod email {
        pub use scribe_adapters::email::*;
    }

    /// Password hashing and JWT handling
    pub mod auth {
        pub use scribe_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use scribe_adapters::config::*;
    }
}

pub use scribe_adapters::{
    Argon2Hasher, InMemoryDatabase, JwtTokenCodec, MockEmailClient, MongoDatabase,
    RelayEmailClient, ResetEmailNotifier, ResetTokenBackend, Settings,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use scribe_service::{DocumentPorts, ScribeService, reset_token_backend, seed_admin};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
