use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ProductClientConfig {
    pub base_url: String,
}

impl ProductClientConfig {
    pub fn init() -> Result<Self> {
        let base_url = std::env::var("PRODUCT_SERVICE_URL")
            .context("Missing environment variable: PRODUCT_SERVICE_URL")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
