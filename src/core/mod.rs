mod item_json;
pub mod items;
pub mod rpc;
pub mod session;
