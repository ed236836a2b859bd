use crate::catalog::CatalogError;
use async_trait::async_trait;

/// Source of the bearer token presented to the catalog API.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self) -> Result<String, CatalogError>;
}

/// Hands out a pre-issued token, e.g. a test token from the environment.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn fetch_token(&self) -> Result<String, CatalogError> {
        if self.token.trim().is_empty() {
            return Err(CatalogError::Token("access token is empty".to_string()));
        }
        Ok(self.token.clone())
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let provider = StaticTokenProvider::new("abc123");
        assert_eq!(provider.fetch_token().await.unwrap(), "abc123");
        assert!(!format!("{:?}", provider).contains("abc123"));
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected() {
        let provider = StaticTokenProvider::new("  ");
        assert!(matches!(
            provider.fetch_token().await,
            Err(CatalogError::Token(_))
        ));
    }
}
