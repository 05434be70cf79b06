mod cache;
mod properties;

pub use cache::MemCache;
pub use properties::Properties;
