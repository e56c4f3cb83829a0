//! Query cache port

use inorbit_domain::QueryKey;

/// Client-side cache of server queries
///
/// Invalidation only marks an entry stale so dependent views refetch it;
/// it never touches cached data.
pub trait QueryCache: Send + Sync {
    fn invalidate(&self, key: QueryKey);
}
