pub mod averages_cache;
pub mod provider;

pub use averages_cache::AveragesCache;
pub use provider::AveragesProvider;
