use crate::domain::ports::Transport;
use crate::utils::error::{Result, ZabbixError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request as the API expects it.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: serde_json::Value,
    /// Session token; left out for methods that must be called anonymously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
    pub id: u64,
}

impl<'a> Request<'a> {
    pub fn new(method: &'a str, params: serde_json::Value, auth: Option<&'a str>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            auth,
            id,
        }
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<ErrorObject>,
    #[serde(default)]
    pub id: Option<u64>,
}

impl Response {
    pub fn into_result(self) -> Result<serde_json::Value> {
        if let Some(error) = self.error {
            return Err(ZabbixError::ApiError {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }
        self.result.ok_or(ZabbixError::MissingResultError)
    }
}

/// Calls a `*.get` method and decodes the result array into `R`.
pub async fn get<T, P, R>(transport: &T, method: &str, params: &P) -> Result<Vec<R>>
where
    T: Transport + ?Sized,
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let params = serde_json::to_value(params)?;
    let result = transport.call(method, params).await?;
    let records = serde_json::from_value(result)?;
    Ok(records)
}
