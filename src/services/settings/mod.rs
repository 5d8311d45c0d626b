mod mapper;
mod service;

pub use mapper::toml_to_config;
pub use service::SettingsService;
