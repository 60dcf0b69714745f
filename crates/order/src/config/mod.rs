mod client_config;

pub use self::client_config::ProductClientConfig;
