//! Radix heap over key/value pairs
//!
//! Same bucketing scheme and monotone contract as [`RadixHeap`](crate::RadixHeap),
//! with an auxiliary payload carried alongside each key. This is a separate
//! type rather than a wrapper around the bare-key heap so that the hot path
//! carries no indirection for either variant.
//!
//! # Example
//!
//! ```rust
//! use monotone_radix_heap::PairRadixHeap;
//!
//! let mut heap: PairRadixHeap<u32, &str> = PairRadixHeap::new();
//! heap.push(10, "ten");
//! heap.push(5, "five");
//!
//! assert_eq!(heap.top_key(), Some(5));
//! assert_eq!(heap.pop(), Some((5, "five")));
//! assert_eq!(heap.pop(), Some((10, "ten")));
//! ```

use crate::encode::{find_bucket, EncodedKey, RadixKey};

/// A radix heap (monotone priority queue) storing a payload with each key.
///
/// Ties among equal keys are broken arbitrarily (last-in-first-out within a
/// bucket); extraction order among equal keys is not stable.
///
/// # Type Parameters
///
/// - `K`: The key type, must implement [`RadixKey`]
/// - `V`: The payload type, owned by the heap until popped
///
/// # Panics
///
/// - `push` and `push_with` panic if called with a key less than the last
///   extracted minimum (violating the monotone property)
#[derive(Clone, Debug)]
pub struct PairRadixHeap<K: RadixKey, V> {
    /// Buckets of (encoded key, payload) pairs, laid out exactly as in
    /// the bare-key heap.
    buckets: Vec<Vec<(K::Encoded, V)>>,

    /// Encoding of the last extracted minimum. Only ever increases.
    last: K::Encoded,

    /// Total number of elements
    len: usize,
}

impl<K: RadixKey, V> PairRadixHeap<K, V> {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        let num_buckets = (K::Encoded::BITS + 1) as usize;
        let mut buckets = Vec::with_capacity(num_buckets);
        for _ in 0..num_buckets {
            buckets.push(Vec::new());
        }

        PairRadixHeap {
            buckets,
            last: K::Encoded::default(),
            len: 0,
        }
    }

    /// Returns true if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts a key with an already-constructed payload.
    ///
    /// # Panics
    ///
    /// Panics if `key` is less than the last extracted minimum.
    pub fn push(&mut self, key: K, value: V) {
        let x = self.encode_checked(key);
        self.buckets[find_bucket(x, self.last)].push((x, value));
        self.len += 1;
    }

    /// Inserts a key with a payload built in place at the insertion site.
    ///
    /// The closure runs after the monotonicity check, directly filling the
    /// bucket slot, so a non-trivial payload is never constructed and then
    /// moved a second time.
    ///
    /// # Panics
    ///
    /// Panics if `key` is less than the last extracted minimum.
    pub fn push_with<F: FnOnce() -> V>(&mut self, key: K, make_value: F) {
        let x = self.encode_checked(key);
        self.buckets[find_bucket(x, self.last)].push((x, make_value()));
        self.len += 1;
    }

    /// Returns the minimum key without removing it, or `None` if empty.
    ///
    /// Takes `&mut self` because locating the minimum may redistribute a
    /// bucket and advance the floor.
    pub fn top_key(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        self.pull();
        Some(K::decode(self.last))
    }

    /// Returns a mutable reference to the payload of the current minimum
    /// without removing it, or `None` if empty.
    pub fn top_value(&mut self) -> Option<&mut V> {
        if self.is_empty() {
            return None;
        }
        self.pull();
        self.buckets[0].last_mut().map(|(_, v)| v)
    }

    /// Removes and returns the minimum key and its payload, or `None` if
    /// empty.
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.is_empty() {
            return None;
        }
        self.pull();
        let (x, value) = self.buckets[0].pop().unwrap();
        self.len -= 1;
        Some((K::decode(x), value))
    }

    /// Removes all elements and resets the floor to the zero encoding, so a
    /// subsequent `push` accepts any key. Payloads are dropped.
    pub fn clear(&mut self) {
        self.len = 0;
        self.last = K::Encoded::default();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Exchanges the entire state (elements, floor, count) with `other`.
    ///
    /// Buckets are moved wholesale, not copied element-wise.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    #[inline]
    fn encode_checked(&self, key: K) -> K::Encoded {
        let x = key.encode();
        assert!(
            x >= self.last,
            "PairRadixHeap: cannot insert key less than last extracted minimum (monotone violation)"
        );
        x
    }

    /// Ensure bucket 0 holds the current minimum. Same redistribution step
    /// as the bare-key heap, with payloads moved along with their keys.
    ///
    /// Caller must ensure `len > 0`.
    fn pull(&mut self) {
        debug_assert!(self.len > 0);
        if !self.buckets[0].is_empty() {
            return;
        }

        let src = (1..self.buckets.len())
            .find(|&i| !self.buckets[i].is_empty())
            .unwrap();

        self.last = self.buckets[src].iter().map(|&(x, _)| x).min().unwrap();

        let drained = std::mem::take(&mut self.buckets[src]);
        for (x, value) in drained {
            self.buckets[find_bucket(x, self.last)].push((x, value));
        }
    }
}

impl<K: RadixKey, V> Default for PairRadixHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
