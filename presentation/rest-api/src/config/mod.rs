pub mod app_config;
pub mod cli;
pub mod server_config;
pub mod store_config;
