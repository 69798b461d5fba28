use crate::utils::error::Result;
use async_trait::async_trait;

/// Invokes a named remote procedure and returns its raw `result` value.
///
/// Implementations own connection handling, authentication, timeouts and
/// error-object decoding. Callers only see the decoded `result` or a
/// `ZabbixError`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        (**self).call(method, params).await
    }
}
