// src/crawl/visited.rs
// =============================================================================
// The set of URLs a single run has already claimed.
//
// claim() is the one synchronization point that matters for correctness:
// the membership check and the insert happen under one lock, so when two
// tasks race for the same URL exactly one of them gets `true` and goes on to
// fetch it. The lock is never held across an .await.
//
// Claim order is remembered so results come out in discovery order.
// =============================================================================

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<Claimed>,
}

#[derive(Debug, Default)]
struct Claimed {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true if this call claimed the URL, false if it was already taken
    pub fn claim(&self, url: &str) -> bool {
        let mut claimed = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if claimed.seen.contains(url) {
            return false;
        }
        claimed.seen.insert(url.to_string());
        claimed.order.push(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .seen
            .contains(url)
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Consumes the set, yielding URLs in claim order
    pub fn into_vec(self) -> Vec<String> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_claim_once() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/a"));
        assert!(!visited.claim("https://example.com/a"));
        assert!(visited.contains("https://example.com/a"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_into_vec_keeps_claim_order() {
        let visited = VisitedSet::new();
        for url in ["c", "a", "b", "a"] {
            visited.claim(url);
        }
        assert_eq!(visited.into_vec(), vec!["c", "a", "b"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_claims_have_one_winner() {
        let visited = Arc::new(VisitedSet::new());
        let mut handles = Vec::new();

        for _ in 0..32 {
            let visited = Arc::clone(&visited);
            handles.push(tokio::spawn(async move {
                visited.claim("https://example.com/contested")
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
