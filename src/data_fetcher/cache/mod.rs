pub mod rankings_cache;
pub mod types;

pub use rankings_cache::{MemoryCache, RankingsCache};
pub use types::CachedRankings;
