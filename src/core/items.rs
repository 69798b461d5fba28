use crate::core::item_json::{JsonItem, JsonItems};
use crate::core::rpc;
use crate::domain::item::{Item, ItemGetParams};
use crate::domain::ports::Transport;
use crate::utils::error::{Result, ZabbixError};

pub const METHOD_ITEM_GET: &str = "item.get";

/// Queries the API for Items matching the given search parameters.
///
/// `ZabbixError::NotFound` is returned if the result set is empty. Transport,
/// decoding and API errors are returned as they come from the transport.
pub async fn get_items<T>(transport: &T, params: &ItemGetParams) -> Result<Vec<Item>>
where
    T: Transport + ?Sized,
{
    let records: Vec<JsonItem> = rpc::get(transport, METHOD_ITEM_GET, params).await?;
    if records.is_empty() {
        return Err(ZabbixError::NotFound);
    }

    JsonItems(records).into_items()
}
