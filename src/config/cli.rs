use crate::domain::item::ItemGetParams;
use crate::domain::params::{GetParameters, SelectQuery, SORT_ASC};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "item-get")]
#[command(about = "Query items from a Zabbix server")]
pub struct CliConfig {
    #[arg(long, default_value = "zabbix.toml", help = "Session configuration file")]
    pub config: String,

    #[arg(long = "host-id", value_delimiter = ',')]
    pub host_ids: Vec<String>,

    #[arg(long = "item-id", value_delimiter = ',')]
    pub item_ids: Vec<String>,

    #[arg(long = "group-id", value_delimiter = ',')]
    pub group_ids: Vec<String>,

    #[arg(long, help = "Only return items whose name contains this text")]
    pub search: Option<String>,

    #[arg(long, default_value = "0", help = "Maximum number of items, 0 for no limit")]
    pub limit: u32,

    #[arg(long, help = "Only items on monitored hosts")]
    pub monitored_only: bool,

    #[arg(long, help = "Include items that belong to templates")]
    pub include_templates: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_params(&self) -> ItemGetParams {
        let mut base = GetParameters {
            limit: self.limit,
            output: Some(SelectQuery::Extend),
            sort_field: vec!["name".to_string()],
            sort_order: vec![SORT_ASC.to_string()],
            ..Default::default()
        };
        if let Some(search) = &self.search {
            base.search.insert("name".to_string(), search.clone());
        }

        ItemGetParams {
            base,
            host_ids: self.host_ids.clone(),
            item_ids: self.item_ids.clone(),
            group_ids: self.group_ids.clone(),
            monitored_only: self.monitored_only,
            include_templates: self.include_templates,
            ..Default::default()
        }
    }
}
