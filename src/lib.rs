//! Monotone radix heap for Rust
//!
//! This crate provides a radix heap: a monotone priority queue in which
//! extracted minimums never decrease, the natural fit for Dijkstra's
//! algorithm and discrete event simulation. Two flavors share one bucketing
//! algorithm:
//!
//! - [`RadixHeap<K>`]: stores bare keys
//! - [`PairRadixHeap<K, V>`]: stores a payload alongside each key
//!
//! Keys may be any primitive integer type or `f32`/`f64`; an order-preserving
//! bit-level encoding ([`RadixKey`]) maps them all onto the same unsigned
//! bucketing scheme. `push` is O(1) and `pop` is amortized O(log C) where C
//! bounds the gap between inserted keys and the current minimum.
//!
//! # Example
//!
//! ```rust
//! use monotone_radix_heap::PairRadixHeap;
//!
//! let mut heap: PairRadixHeap<f64, &str> = PairRadixHeap::new();
//! heap.push(0.5, "hoge");
//! heap.push(-10.0, "piyo");
//!
//! assert_eq!(heap.pop(), Some((-10.0, "piyo")));
//! assert_eq!(heap.pop(), Some((0.5, "hoge")));
//! ```

pub mod encode;
pub mod heap;
pub mod pair;

pub use encode::{EncodedKey, RadixKey};
pub use heap::RadixHeap;
pub use pair::PairRadixHeap;
