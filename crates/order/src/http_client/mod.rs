mod product;

pub use self::product::ProductHttpClient;
