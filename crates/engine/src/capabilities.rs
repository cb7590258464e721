//! Memoizing wrapper around capability resolution
//!
//! The domain resolver is cheap, but session views recompute on every
//! update, so the cache skips recomputation while the inputs are the
//! same fetched objects. Identity is pointer identity (`Arc::ptr_eq`),
//! matching the "same fetch result" semantics - a re-fetch producing an
//! equal snapshot still recomputes, which is correct because the
//! resolver is idempotent. Purely a performance layer.

use std::sync::Arc;

use playdeck_domain::ids::SessionId;
use playdeck_domain::value_objects::capabilities::SessionCapabilities;
use playdeck_domain::value_objects::snapshot::{GameSnapshot, ToolConfig};

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Option<Arc<GameSnapshot>>,
    tools: Option<Arc<Vec<ToolConfig>>>,
    capabilities: SessionCapabilities,
}

/// Single-session capability cache.
#[derive(Debug, Clone)]
pub struct CapabilityCache {
    session_id: SessionId,
    last: Option<CacheEntry>,
}

fn same_identity<T>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl CapabilityCache {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            last: None,
        }
    }

    /// The session this cache serves.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Resolve capabilities, reusing the last result when both inputs
    /// are the same objects as last time.
    pub fn resolve(
        &mut self,
        snapshot: Option<&Arc<GameSnapshot>>,
        tools: Option<&Arc<Vec<ToolConfig>>>,
    ) -> &SessionCapabilities {
        let snapshot = snapshot.cloned();
        let tools = tools.cloned();

        let hit = self
            .last
            .as_ref()
            .is_some_and(|e| same_identity(&e.snapshot, &snapshot) && same_identity(&e.tools, &tools));

        if !hit {
            tracing::debug!(session_id = %self.session_id, "capability cache miss, recomputing");
            let capabilities = SessionCapabilities::resolve(
                snapshot.as_deref(),
                tools.as_deref().map(Vec::as_slice),
            );
            self.last = Some(CacheEntry {
                snapshot,
                tools,
                capabilities,
            });
        }

        // Entry was just written on a miss
        match &self.last {
            Some(entry) => &entry.capabilities,
            None => unreachable!("cache entry populated above"),
        }
    }

    /// Drop the cached entry, forcing the next resolve to recompute.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
