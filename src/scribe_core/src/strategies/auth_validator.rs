use async_trait::async_trait;

/// Validates the credential a request carries before it reaches a handler.
///
/// The validator receives request parts (headers, method, URI, extensions)
/// rather than the full request, so non-`Sync` bodies never cross it.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// Identity produced by a valid credential, handed to extractors.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract the credential from `parts` and verify it.
    ///
    /// # Errors
    ///
    /// Fails when no credential is present or it does not verify.
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
