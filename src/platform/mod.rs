// vkentry/src/platform/mod.rs
//
//! Platform-specific backends.
//!
//! Each backend names the Vulkan loader library for its platform and knows how to open it, look
//! up a symbol in it, and close it. Exactly one of them is `default`.

#[cfg(any(linux, android))]
pub(crate) mod generic;

#[cfg(linux)]
pub mod linux;
#[cfg(linux)]
pub use linux as default;

#[cfg(android)]
pub mod android;
#[cfg(android)]
pub use android as default;

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use windows as default;

#[cfg(not(any(linux, android, windows)))]
compile_error!("vkentry doesn't know where the Vulkan loader lives on this platform");
