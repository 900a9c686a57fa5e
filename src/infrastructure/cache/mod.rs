//! Cache infrastructure - moka-backed read-through caches

mod password_cache;
mod settings;
mod tag_cache;

pub use password_cache::MokaPasswordCache;
pub use settings::CacheSettings;
pub use tag_cache::MokaTagCache;
