//! The Item entity and the parameters of an `item.get` call.
//!
//! See: https://www.zabbix.com/documentation/4.0/manual/api/reference/item/object

use crate::domain::params::{is_false, GetParameters, SelectQuery};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item created by the server itself.
pub const ITEM_SOURCE_DEFAULT: i32 = 0;
/// Item created by a low-level discovery rule.
pub const ITEM_SOURCE_DISCOVERY: i32 = 4;

/// A single monitored metric on a single host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// ID of the host that owns the item.
    pub host_id: String,

    /// Unique ID of the item.
    pub item_id: String,

    /// Technical name of the item.
    pub name: String,

    pub description: String,

    /// Unix time of the most recent value.
    pub last_observed_at: i64,

    /// Most recent value.
    pub last_value: i64,

    /// Origin of the item, one of the `ITEM_SOURCE_*` constants.
    pub source_kind: i32,
}

impl Item {
    /// `last_observed_at` as a UTC timestamp, `None` when out of range.
    pub fn last_observed_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_observed_at, 0)
    }
}

/// Parameters for an `item.get` call.
///
/// Every filter is optional; empty ID lists, `false` toggles and `None`
/// selects are left out of the request.
///
/// See: https://www.zabbix.com/documentation/4.0/manual/api/reference/item/get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemGetParams {
    #[serde(flatten)]
    pub base: GetParameters,

    /// Only items on hosts in the given host groups.
    #[serde(rename = "groupids", default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,

    /// Only items that belong to the given applications.
    #[serde(rename = "applicationids", default, skip_serializing_if = "Vec::is_empty")]
    pub application_ids: Vec<String>,

    #[serde(rename = "dserviceids", default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_service_ids: Vec<String>,

    /// Only items used in the given graphs.
    #[serde(rename = "graphids", default, skip_serializing_if = "Vec::is_empty")]
    pub graph_ids: Vec<String>,

    #[serde(rename = "hostids", default, skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,

    /// Only items of the given web scenarios.
    #[serde(rename = "httptestids", default, skip_serializing_if = "Vec::is_empty")]
    pub web_check_ids: Vec<String>,

    #[serde(rename = "interfaceids", default, skip_serializing_if = "Vec::is_empty")]
    pub interface_ids: Vec<String>,

    #[serde(rename = "itemids", default, skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,

    /// Only items on hosts affected by the given maintenances.
    #[serde(rename = "maintenanceids", default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_ids: Vec<String>,

    /// Only items on monitored hosts.
    #[serde(rename = "monitored_hosts", default, skip_serializing_if = "is_false")]
    pub monitored_only: bool,

    /// Only items on proxies.
    #[serde(rename = "proxy_host", default, skip_serializing_if = "is_false")]
    pub proxies_only: bool,

    /// Only items on hosts monitored by the given proxies.
    #[serde(rename = "proxyids", default, skip_serializing_if = "Vec::is_empty")]
    pub proxy_ids: Vec<String>,

    /// Include items that belong to templates.
    #[serde(rename = "templated_hosts", default, skip_serializing_if = "is_false")]
    pub include_templates: bool,

    #[serde(rename = "selectGroups", default, skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,

    #[serde(rename = "selectApplications", default, skip_serializing_if = "Option::is_none")]
    pub select_applications: Option<SelectQuery>,

    #[serde(rename = "selectDiscoveries", default, skip_serializing_if = "Option::is_none")]
    pub select_discoveries: Option<SelectQuery>,

    /// Attach the low-level discovery rule that created the item.
    #[serde(rename = "selectDiscoveryRule", default, skip_serializing_if = "Option::is_none")]
    pub select_discovery_rule: Option<SelectQuery>,

    #[serde(rename = "selectGraphs", default, skip_serializing_if = "Option::is_none")]
    pub select_graphs: Option<SelectQuery>,

    #[serde(rename = "selectHostDiscovery", default, skip_serializing_if = "Option::is_none")]
    pub select_host_discovery: Option<SelectQuery>,

    #[serde(rename = "selectHttpTests", default, skip_serializing_if = "Option::is_none")]
    pub select_web_scenarios: Option<SelectQuery>,

    #[serde(rename = "selectInterfaces", default, skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<SelectQuery>,

    #[serde(rename = "selectInventory", default, skip_serializing_if = "Option::is_none")]
    pub select_inventory: Option<SelectQuery>,

    #[serde(rename = "selectItems", default, skip_serializing_if = "Option::is_none")]
    pub select_items: Option<SelectQuery>,

    #[serde(rename = "selectMacros", default, skip_serializing_if = "Option::is_none")]
    pub select_macros: Option<SelectQuery>,

    #[serde(rename = "selectParentTemplates", default, skip_serializing_if = "Option::is_none")]
    pub select_parent_templates: Option<SelectQuery>,

    #[serde(rename = "selectScreens", default, skip_serializing_if = "Option::is_none")]
    pub select_screens: Option<SelectQuery>,

    #[serde(rename = "selectTriggers", default, skip_serializing_if = "Option::is_none")]
    pub select_triggers: Option<SelectQuery>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_params_omit_every_field() {
        let value = serde_json::to_value(ItemGetParams::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_params_use_wire_names_and_flatten_base() {
        let params = ItemGetParams {
            base: GetParameters {
                limit: 5,
                output: Some(SelectQuery::Extend),
                ..Default::default()
            },
            host_ids: vec!["10084".to_string()],
            web_check_ids: vec!["7".to_string()],
            monitored_only: true,
            include_templates: true,
            select_web_scenarios: Some(SelectQuery::Count),
            select_triggers: Some(SelectQuery::fields(["triggerid"])),
            ..Default::default()
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "limit": 5,
                "output": "extend",
                "hostids": ["10084"],
                "httptestids": ["7"],
                "monitored_hosts": true,
                "templated_hosts": true,
                "selectHttpTests": "count",
                "selectTriggers": ["triggerid"]
            })
        );
    }

    #[test]
    fn test_false_toggles_are_not_sent() {
        let params = ItemGetParams {
            proxies_only: false,
            proxy_ids: vec!["3".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"proxyids": ["3"]}));
    }

    #[test]
    fn test_params_parse_from_wire_json() {
        let params: ItemGetParams = serde_json::from_value(json!({
            "groupids": ["2"],
            "limit": 20,
            "selectGroups": "extend"
        }))
        .unwrap();
        assert_eq!(params.group_ids, vec!["2".to_string()]);
        assert_eq!(params.base.limit, 20);
        assert_eq!(params.select_groups, Some(SelectQuery::Extend));
        assert!(params.select_items.is_none());
    }

    #[test]
    fn test_last_observed_time() {
        let item = Item {
            host_id: "10084".to_string(),
            item_id: "523".to_string(),
            name: "CPU load".to_string(),
            description: String::new(),
            last_observed_at: 1620000000,
            last_value: 3,
            source_kind: ITEM_SOURCE_DEFAULT,
        };
        let time = item.last_observed_time().unwrap();
        assert_eq!(time.to_rfc3339(), "2021-05-03T00:00:00+00:00");
    }
}
