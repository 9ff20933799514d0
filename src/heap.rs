//! Radix heap over bare keys
//!
//! A monotone priority queue optimized for Dijkstra's algorithm and other
//! workloads where extracted minimums never decrease.
//!
//! # Monotone Property
//!
//! A radix heap is a **monotone priority queue**: you cannot insert a key
//! smaller than the last extracted minimum. This constraint is naturally
//! satisfied by Dijkstra's algorithm with non-negative edge weights, since
//! relaxed distances are always `>= d[u]` where `d[u]` is the distance of the
//! node just extracted.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(1)                |
//! | `pop`     | O(log C) amortized* |
//! | `top`     | O(log C) amortized* |
//! | `clear`   | O(B)                |
//! | `swap`    | O(1)                |
//!
//! *Where C is the maximum difference between any key and the floor at the
//! time it was inserted. Each element can only ever move to a strictly
//! lower-numbered bucket, at most B times over its lifetime, so total
//! redistribution work is O(n·B) across n operations.
//!
//! # Cache Performance
//!
//! Radix heaps have excellent cache locality because buckets are contiguous
//! vectors, most operations touch only 1-2 buckets, and there is no pointer
//! chasing (unlike Fibonacci/Pairing heaps).
//!
//! # References
//!
//! - Ahuja, R. K., Mehlhorn, K., Orlin, J. B., & Tarjan, R. E. (1990).
//!   "Faster algorithms for the shortest path problem."
//!   *Journal of the ACM*, 37(2), 213-223.
//!   [ACM DL](https://dl.acm.org/doi/10.1145/77600.77615)
//!
//! # Example
//!
//! ```rust
//! use monotone_radix_heap::RadixHeap;
//!
//! let mut heap: RadixHeap<i32> = RadixHeap::new();
//! heap.push(10);
//! heap.push(-5);
//!
//! assert_eq!(heap.pop(), Some(-5));
//! heap.push(8); // fine: 8 >= -5
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), Some(10));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::encode::{find_bucket, EncodedKey, RadixKey};

/// A radix heap (monotone priority queue) storing bare keys.
///
/// Keys are held in encoded form and decoded only when returned, so the
/// per-operation cost is a fixed handful of bit operations on top of a
/// `Vec` push or pop.
///
/// For a variant that carries a payload alongside each key, see
/// [`PairRadixHeap`](crate::PairRadixHeap).
///
/// # Type Parameters
///
/// - `K`: The key type, must implement [`RadixKey`] (primitive integers and
///   floats)
///
/// # Panics
///
/// - `push` panics if called with a key less than the last extracted minimum
///   (violating the monotone property)
#[derive(Clone, Debug)]
pub struct RadixHeap<K: RadixKey> {
    /// Buckets indexed by the highest bit differing from `last`.
    /// Bucket 0 contains elements whose encoding equals `last`;
    /// bucket i (1 <= i <= BITS) contains elements differing at bit i - 1.
    buckets: Vec<Vec<K::Encoded>>,

    /// Encoding of the last extracted minimum (or the zero encoding before
    /// any extraction). Only ever increases.
    last: K::Encoded,

    /// Total number of elements
    len: usize,
}

impl<K: RadixKey> RadixHeap<K> {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        // BITS + 1 buckets: bucket 0 for exact floor matches, buckets
        // 1..=BITS for differences at each bit position.
        let num_buckets = (K::Encoded::BITS + 1) as usize;
        let mut buckets = Vec::with_capacity(num_buckets);
        for _ in 0..num_buckets {
            buckets.push(Vec::new());
        }

        RadixHeap {
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

    /// Inserts a key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is less than the last extracted minimum.
    pub fn push(&mut self, key: K) {
        let x = key.encode();
        assert!(
            x >= self.last,
            "RadixHeap: cannot insert key less than last extracted minimum (monotone violation)"
        );

        self.buckets[find_bucket(x, self.last)].push(x);
        self.len += 1;
    }

    /// Returns the minimum key without removing it, or `None` if empty.
    ///
    /// Takes `&mut self` because locating the minimum may redistribute a
    /// bucket and advance the floor.
    pub fn top(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        self.pull();
        Some(K::decode(self.last))
    }

    /// Removes and returns the minimum key, or `None` if empty.
    pub fn pop(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        self.pull();
        let x = self.buckets[0].pop().unwrap();
        self.len -= 1;
        Some(K::decode(x))
    }

    /// Removes all elements and resets the floor to the zero encoding, so a
    /// subsequent `push` accepts any key.
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

    /// Ensure bucket 0 holds the current minimum.
    ///
    /// If bucket 0 is empty, finds the first non-empty bucket, advances the
    /// floor to its minimum, and redistributes its elements into finer
    /// buckets. Every redistributed element lands in a strictly lower bucket,
    /// and those equal to the new floor land in bucket 0.
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

        // The floor only ever advances, here and nowhere else.
        self.last = *self.buckets[src].iter().min().unwrap();

        let drained = std::mem::take(&mut self.buckets[src]);
        for x in drained {
            self.buckets[find_bucket(x, self.last)].push(x);
        }
    }
}

impl<K: RadixKey> Default for RadixHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
