use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

pub const SORT_ASC: &str = "ASC";
pub const SORT_DESC: &str = "DESC";

/// What a `select*` or `output` parameter asks the server to return.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSelectQuery")]
pub enum SelectQuery {
    /// `"extend"`: every property of the object.
    Extend,
    /// `"count"`: only the number of related objects.
    Count,
    /// Only the listed properties.
    Fields(Vec<String>),
}

impl SelectQuery {
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectQuery::Fields(fields.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelectQuery {
    Keyword(String),
    Fields(Vec<String>),
}

impl TryFrom<RawSelectQuery> for SelectQuery {
    type Error = String;

    fn try_from(raw: RawSelectQuery) -> Result<Self, Self::Error> {
        match raw {
            RawSelectQuery::Keyword(word) => match word.as_str() {
                "extend" => Ok(SelectQuery::Extend),
                "count" => Ok(SelectQuery::Count),
                other => Err(format!("unknown select keyword: {}", other)),
            },
            RawSelectQuery::Fields(fields) => Ok(SelectQuery::Fields(fields)),
        }
    }
}

impl Serialize for SelectQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectQuery::Extend => serializer.serialize_str("extend"),
            SelectQuery::Count => serializer.serialize_str("count"),
            SelectQuery::Fields(fields) => fields.serialize(serializer),
        }
    }
}

/// Parameters shared by every `*.get` method of the API.
///
/// Fields left at their default are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetParameters {
    /// Return the number of matching records instead of the records.
    #[serde(rename = "countOutput", default, skip_serializing_if = "is_false")]
    pub count_output: bool,

    /// Only return objects the user has write access to.
    #[serde(default, skip_serializing_if = "is_false")]
    pub editable: bool,

    /// Return results that do not match `search`.
    #[serde(rename = "excludeSearch", default, skip_serializing_if = "is_false")]
    pub exclude_search: bool,

    /// Exact-match filters keyed by property name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub filter: HashMap<String, serde_json::Value>,

    /// Maximum number of records; zero means no limit.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,

    /// Object properties to return; the server default is `extend`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<SelectQuery>,

    /// Key results by object ID instead of returning an array.
    #[serde(rename = "preservekeys", default, skip_serializing_if = "is_false")]
    pub preserve_keys: bool,

    /// Case-insensitive substring search keyed by property name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub search: HashMap<String, String>,

    #[serde(rename = "searchByAny", default, skip_serializing_if = "is_false")]
    pub search_by_any: bool,

    #[serde(rename = "searchWildcardsEnabled", default, skip_serializing_if = "is_false")]
    pub search_wildcards_enabled: bool,

    #[serde(rename = "sortfield", default, skip_serializing_if = "Vec::is_empty")]
    pub sort_field: Vec<String>,

    /// `SORT_ASC` or `SORT_DESC`, one per entry in `sort_field`.
    #[serde(rename = "sortorder", default, skip_serializing_if = "Vec::is_empty")]
    pub sort_order: Vec<String>,

    /// Match `search` against the start of the value only.
    #[serde(rename = "startSearch", default, skip_serializing_if = "is_false")]
    pub start_search: bool,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_query_wire_forms() {
        assert_eq!(serde_json::to_value(SelectQuery::Extend).unwrap(), json!("extend"));
        assert_eq!(serde_json::to_value(SelectQuery::Count).unwrap(), json!("count"));
        assert_eq!(
            serde_json::to_value(SelectQuery::fields(["itemid", "name"])).unwrap(),
            json!(["itemid", "name"])
        );
    }

    #[test]
    fn test_select_query_parses_back() {
        let extend: SelectQuery = serde_json::from_value(json!("extend")).unwrap();
        assert_eq!(extend, SelectQuery::Extend);
        let fields: SelectQuery = serde_json::from_value(json!(["hostid"])).unwrap();
        assert_eq!(fields, SelectQuery::fields(["hostid"]));
        assert!(serde_json::from_value::<SelectQuery>(json!("everything")).is_err());
    }

    #[test]
    fn test_default_get_parameters_serialize_empty() {
        let value = serde_json::to_value(GetParameters::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_get_parameters_wire_names() {
        let mut params = GetParameters {
            count_output: true,
            limit: 10,
            sort_field: vec!["name".to_string()],
            sort_order: vec![SORT_DESC.to_string()],
            start_search: true,
            ..Default::default()
        };
        params.search.insert("name".to_string(), "CPU".to_string());

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "countOutput": true,
                "limit": 10,
                "search": {"name": "CPU"},
                "sortfield": ["name"],
                "sortorder": ["DESC"],
                "startSearch": true
            })
        );
    }
}
