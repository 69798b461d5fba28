use crate::domain::item::Item;
use crate::utils::error::{Result, ZabbixError};
use serde::Deserialize;

/// Item object exactly as `item.get` returns it.
///
/// See: https://www.zabbix.com/documentation/4.0/manual/api/reference/item/object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonItem {
    #[serde(rename = "hostid")]
    pub host_id: String,
    #[serde(rename = "itemid")]
    pub item_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "lastclock")]
    pub last_clock: i64,
    #[serde(rename = "lastvalue")]
    pub last_value: i64,
    pub source: i32,
}

impl TryFrom<JsonItem> for Item {
    type Error = ZabbixError;

    fn try_from(json: JsonItem) -> Result<Self> {
        Ok(Item {
            host_id: json.host_id,
            item_id: json.item_id,
            name: json.name,
            description: json.description,
            last_observed_at: json.last_clock,
            last_value: json.last_value,
            source_kind: json.source,
        })
    }
}

/// A decoded `item.get` result.
pub struct JsonItems(pub Vec<JsonItem>);

impl JsonItems {
    /// Maps every record in order. The first failure aborts the whole batch.
    pub fn into_items(self) -> Result<Vec<Item>> {
        self.0
            .into_iter()
            .enumerate()
            .map(|(index, json)| {
                Item::try_from(json).map_err(|e| ZabbixError::MappingError {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cpu_load() -> serde_json::Value {
        json!({
            "hostid": "10084",
            "itemid": "523",
            "name": "CPU load",
            "description": "",
            "lastclock": 1620000000,
            "lastvalue": 3,
            "source": 0
        })
    }

    #[test]
    fn test_item_copies_every_field() {
        let json: JsonItem = serde_json::from_value(cpu_load()).unwrap();
        let item = Item::try_from(json).unwrap();
        assert_eq!(
            item,
            Item {
                host_id: "10084".to_string(),
                item_id: "523".to_string(),
                name: "CPU load".to_string(),
                description: String::new(),
                last_observed_at: 1620000000,
                last_value: 3,
                source_kind: 0,
            }
        );
    }

    #[test]
    fn test_translation_is_deterministic() {
        let json: JsonItem = serde_json::from_value(cpu_load()).unwrap();
        let first = Item::try_from(json.clone()).unwrap();
        let second = Item::try_from(json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_items_preserves_order() {
        let records: Vec<JsonItem> = serde_json::from_value(json!([
            {"hostid": "1", "itemid": "30", "name": "c", "description": "", "lastclock": 3, "lastvalue": 30, "source": 4},
            {"hostid": "1", "itemid": "10", "name": "a", "description": "", "lastclock": 1, "lastvalue": 10, "source": 0},
            {"hostid": "2", "itemid": "20", "name": "b", "description": "x", "lastclock": 2, "lastvalue": -20, "source": 0}
        ]))
        .unwrap();

        let items = JsonItems(records).into_items().unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
        assert_eq!(items[0].source_kind, 4);
        assert_eq!(items[2].last_value, -20);
        assert_eq!(items[2].description, "x");
    }

    #[test]
    fn test_into_items_empty() {
        assert!(JsonItems(Vec::new()).into_items().unwrap().is_empty());
    }

    #[test]
    fn test_string_last_value_is_rejected() {
        let mut record = cpu_load();
        record["lastvalue"] = json!("3.25");
        assert!(serde_json::from_value::<JsonItem>(record).is_err());
    }
}
