use scribe_core::{RepositoryError, TokenCodec, TokenError, TokenPair, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RefreshTokensError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Refresh use case - trades a live refresh token for a fresh pair.
///
/// There is no revocation list: a refresh token stays usable until it
/// expires. The pair is issued from the current stored record, so flag
/// changes show up on the next refresh.
pub struct RefreshTokensUseCase<'a, U, T>
where
    U: UserRepository,
    T: TokenCodec,
{
    user_repository: &'a U,
    token_codec: &'a T,
}

impl<'a, U, T> RefreshTokensUseCase<'a, U, T>
where
    U: UserRepository,
    T: TokenCodec,
{
    pub fn new(user_repository: &'a U, token_codec: &'a T) -> Self {
        Self {
            user_repository,
            token_codec,
        }
    }

    #[tracing::instrument(name = "RefreshTokensUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshTokensError> {
        let claims = self.token_codec.validate_refresh_token(refresh_token)?;
        let user = self.user_repository.find_by_id(&claims.user_id).await?;

        Ok(self.token_codec.issue_pair(&user)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AccountFlagsUseCase, LoginUseCase, RegisterUseCase,
        test_support::{
            MockHasher, MockTokenCodec, MockUserRepository, email, password, registration,
        },
    };

    #[tokio::test]
    async fn test_refresh_issues_new_pair_with_current_flags() {
        let repository = MockUserRepository::default();
        let codec = MockTokenCodec::default();
        let user = RegisterUseCase::new(&repository, &MockHasher)
            .execute(registration("a@x.com", "pw1", "@a", "+1"))
            .await
            .unwrap();
        let tokens = LoginUseCase::new(&repository, &MockHasher, &codec)
            .execute(email("a@x.com"), password("pw1"))
            .await
            .unwrap();

        AccountFlagsUseCase::new(&repository)
            .promote(&user.id)
            .await
            .unwrap();

        let refreshed = RefreshTokensUseCase::new(&repository, &codec)
            .execute(&tokens.refresh_token)
            .await
            .unwrap();

        let claims = codec.validate_access_token(&refreshed.access_token).unwrap();
        assert!(claims.is_admin);
        assert_ne!(refreshed.refresh_token, tokens.refresh_token);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let repository = MockUserRepository::default();
        let codec = MockTokenCodec::default();
        RegisterUseCase::new(&repository, &MockHasher)
            .execute(registration("a@x.com", "pw1", "@a", "+1"))
            .await
            .unwrap();
        let tokens = LoginUseCase::new(&repository, &MockHasher, &codec)
            .execute(email("a@x.com"), password("pw1"))
            .await
            .unwrap();

        let result = RefreshTokensUseCase::new(&repository, &codec)
            .execute(&tokens.access_token)
            .await;

        assert!(matches!(
            result,
            Err(RefreshTokensError::Token(TokenError::InvalidClaims))
        ));
    }

    #[tokio::test]
    async fn test_refresh_for_deleted_user_fails_not_found() {
        let repository = MockUserRepository::default();
        let codec = MockTokenCodec::default();
        let user = RegisterUseCase::new(&repository, &MockHasher)
            .execute(registration("a@x.com", "pw1", "@a", "+1"))
            .await
            .unwrap();
        let tokens = codec.issue_pair(&user).unwrap();
        repository.users.write().await.clear();

        let result = RefreshTokensUseCase::new(&repository, &codec)
            .execute(&tokens.refresh_token)
            .await;

        assert!(matches!(
            result,
            Err(RefreshTokensError::Repository(RepositoryError::NotFound))
        ));
    }
}
