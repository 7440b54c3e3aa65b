pub mod server_config;
pub mod window_config;
