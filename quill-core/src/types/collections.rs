//! Hash collections used across Quill crates.
//!
//! FxHash beats SipHash for the short string keys (category names, rule ids)
//! these maps hold.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
