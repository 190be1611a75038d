//! Read-through listing cache with single-flight fetches

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheStorage, POSITIONS_KEY};
use crate::client::{FetchResult, PostingsApi};
use crate::error::{CacheError, Result};
use crate::listing::{ListingCollection, normalize};

/// Value stored under [`POSITIONS_KEY`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub site_identifier: String,
    pub created_at: DateTime<Utc>,
    pub listings: ListingCollection,
}

type Flight = Shared<BoxFuture<'static, FetchResult<Arc<ListingCollection>>>>;

/// Listing cache in front of any [`PostingsApi`].
///
/// Holds at most one entry. An entry is served until it expires, is
/// invalidated, or a different site identifier is requested. Without a
/// store (`--no-cache`) every read fetches, but concurrent reads of the same
/// site still share one request.
pub struct ListingCache<C: PostingsApi> {
    inner: Arc<C>,
    store: Option<Arc<Mutex<CacheStorage>>>,
    ttl: Duration,
    in_flight: tokio::sync::Mutex<HashMap<String, Flight>>,
}

impl<C: PostingsApi + 'static> ListingCache<C> {
    /// Create a cache over `inner`.
    ///
    /// # Arguments
    /// * `inner` - The fetcher to read through to
    /// * `store` - Transient storage, `None` to disable caching
    /// * `ttl` - Lifetime of a stored entry
    pub fn new(inner: C, store: Option<CacheStorage>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            store: store.map(|s| Arc::new(Mutex::new(s))),
            ttl,
            in_flight: tokio::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Get the wrapped fetcher
    #[cfg(test)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Listings for `site_identifier`, from the store when fresh.
    pub async fn get(&self, site_identifier: &str) -> Result<Arc<ListingCollection>> {
        if let Some(cached) = self.read_entry(site_identifier) {
            log::debug!("Cache hit: {}", POSITIONS_KEY);
            return Ok(cached);
        }

        let flight = {
            let mut in_flight = self.in_flight.lock().await;
            match in_flight.get(site_identifier) {
                Some(flight) => {
                    log::debug!("Joining in-flight fetch for {}", site_identifier);
                    flight.clone()
                }
                None => {
                    // A flight may have completed between the first read and the lock
                    if let Some(cached) = self.read_entry(site_identifier) {
                        log::debug!("Cache hit after flight: {}", POSITIONS_KEY);
                        return Ok(cached);
                    }

                    log::debug!("Cache miss: fetching postings for {}", site_identifier);
                    let flight = self.start_flight(site_identifier);
                    in_flight.insert(site_identifier.to_string(), flight.clone());
                    flight
                }
            }
        };

        let result = flight.clone().await;

        let mut in_flight = self.in_flight.lock().await;
        if in_flight
            .get(site_identifier)
            .is_some_and(|current| current.ptr_eq(&flight))
        {
            in_flight.remove(site_identifier);
        }
        drop(in_flight);

        Ok(result?)
    }

    /// Drop the stored entry; the next `get` fetches.
    ///
    /// Returns whether an entry was removed.
    pub fn invalidate(&self) -> Result<bool> {
        let Some(store) = &self.store else {
            return Ok(false);
        };

        let guard = lock_store(store);
        let removed = guard.delete_by_key(POSITIONS_KEY)?;
        log::debug!("Invalidated {} (removed: {})", POSITIONS_KEY, removed);
        Ok(removed)
    }

    fn start_flight(&self, site_identifier: &str) -> Flight {
        let inner = Arc::clone(&self.inner);
        let store = self.store.clone();
        let ttl = self.ttl;
        let site = site_identifier.to_string();

        async move {
            let raw = inner.fetch_postings(&site).await?;
            let listings = Arc::new(normalize(raw));
            log::info!("Fetched {} listings for {}", listings.len(), site);

            if let Some(store) = store {
                if let Err(e) = write_entry(&store, &site, &listings, ttl) {
                    log::warn!("Failed to write listing cache: {}", e);
                }
            }

            Ok(listings)
        }
        .boxed()
        .shared()
    }

    /// Stored listings for the site, if present, fresh and readable
    fn read_entry(&self, site_identifier: &str) -> Option<Arc<ListingCollection>> {
        let store = self.store.as_ref()?;
        let guard = lock_store(store);

        let stored = match guard.get(POSITIONS_KEY) {
            Ok(stored) => stored?,
            Err(e) => {
                log::warn!("Failed to read listing cache: {}", e);
                return None;
            }
        };

        if stored.site_identifier != site_identifier {
            log::debug!(
                "Cached listings belong to {}, not {}",
                stored.site_identifier,
                site_identifier
            );
            return None;
        }

        let entry = match decode_entry(&stored.data) {
            Ok(entry) if entry.site_identifier == site_identifier => entry,
            Ok(entry) => {
                log::warn!(
                    "Discarding listing cache entry stored for {} under {}",
                    entry.site_identifier,
                    site_identifier
                );
                let _ = guard.delete_by_key(POSITIONS_KEY);
                return None;
            }
            Err(e) => {
                log::warn!("Discarding unreadable listing cache entry: {}", e);
                let _ = guard.delete_by_key(POSITIONS_KEY);
                return None;
            }
        };

        log::debug!(
            "Cached listings for {} are {}s old",
            entry.site_identifier,
            (Utc::now() - entry.created_at).num_seconds()
        );
        Some(Arc::new(entry.listings))
    }
}

fn decode_entry(data: &str) -> std::result::Result<CacheEntry, CacheError> {
    Ok(serde_json::from_str(data)?)
}

/// Store a freshly fetched collection; failures only cost the next read a fetch
fn write_entry(
    store: &Mutex<CacheStorage>,
    site_identifier: &str,
    listings: &ListingCollection,
    ttl: Duration,
) -> std::result::Result<(), CacheError> {
    let entry = CacheEntry {
        site_identifier: site_identifier.to_string(),
        created_at: Utc::now(),
        listings: listings.clone(),
    };

    let data = serde_json::to_string(&entry)?;
    lock_store(store).put(POSITIONS_KEY, site_identifier, &data, ttl)
}

/// A panic while holding the store leaves it usable; recover the guard.
fn lock_store(store: &Mutex<CacheStorage>) -> std::sync::MutexGuard<'_, CacheStorage> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
