pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use use_cases::{
    account_flags::AccountFlagsUseCase,
    blogs::BlogUseCase,
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    login::{LoginError, LoginUseCase},
    refresh_tokens::{RefreshTokensError, RefreshTokensUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    user_directory::{UserDirectoryError, UserDirectoryUseCase},
};
