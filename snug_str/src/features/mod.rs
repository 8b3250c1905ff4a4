//! Implementations for optional features, e.g. `serde` support

#[cfg(feature = "serde")]
mod serde;
