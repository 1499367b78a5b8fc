// Adapters layer: concrete implementations of the domain ports.
// Only the browser adapter exists; native builds exercise the core through mocks.

#[cfg(target_arch = "wasm32")]
pub mod web;
