//! Hop records and the redirect chain returned by a trace.
//!
//! Hops are recorded in fetch order and reversed exactly once when the trace
//! finishes, so index 0 of a [`RedirectChain`] is always the most recently
//! fetched hop and the last index is the hop for the URL the caller supplied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One fetch attempt and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// URL fetched for this hop
    pub url: String,
    /// Next target discovered from this hop; empty when the hop is terminal
    pub target_url: String,
    /// Response headers, one value per name (the last occurrence wins)
    pub headers: BTreeMap<String, String>,
    /// Captured body for `text/plain` and `text/html` responses, capped in size
    pub body: String,
}

impl Hop {
    /// Whether this hop discovered no further redirect.
    pub fn is_terminal(&self) -> bool {
        self.target_url.is_empty()
    }
}

/// The hops of one trace, latest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectChain {
    hops: Vec<Hop>,
}

impl RedirectChain {
    /// The most recently fetched hop.
    pub fn latest(&self) -> Option<&Hop> {
        self.hops.first()
    }

    /// The hop for the originally supplied URL.
    pub fn origin(&self) -> Option<&Hop> {
        self.hops.last()
    }

    /// Whether the trace stopped at its hop bound while the latest hop still
    /// pointed somewhere else.
    pub fn is_cut_short(&self) -> bool {
        self.latest().is_some_and(|hop| !hop.is_terminal())
    }

    /// Number of hops that discovered a target.
    pub fn redirect_count(&self) -> usize {
        self.hops.iter().filter(|hop| !hop.is_terminal()).count()
    }

    /// Number of hops fetched.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Whether no hop was fetched (only possible for a failed trace).
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Iterates latest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Hop> {
        self.hops.iter()
    }

    /// The hops, latest first.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Consumes the chain, returning the hops latest first.
    pub fn into_hops(self) -> Vec<Hop> {
        self.hops
    }
}

impl<'a> IntoIterator for &'a RedirectChain {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

/// Append-only hop log used while a trace runs.
#[derive(Debug, Default)]
pub(crate) struct ChainRecorder {
    hops: Vec<Hop>,
}

impl ChainRecorder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            hops: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, hop: Hop) {
        self.hops.push(hop);
    }

    /// Reverses fetch order into the latest-first contract.
    pub(crate) fn finish(mut self) -> RedirectChain {
        self.hops.reverse();
        RedirectChain { hops: self.hops }
    }
}
