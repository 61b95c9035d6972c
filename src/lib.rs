// vkentry/src/lib.rs
//
//! Loads the platform Vulkan driver and resolves its `vkGetInstanceProcAddr` entry point.
//!
//! Everything else in the Vulkan API is reached through that one function, so this crate stops
//! there: it opens the system loader library, hands back the entry point, and closes the library
//! again when asked. Building the rest of the function table is up to the caller.
//!
//! ```no_run
//! let mut loader = vkentry::Loader::new();
//! if let Some(entry_point) = loader.initialize() {
//!     let get_instance_proc_addr = unsafe { entry_point.to_get_instance_proc_addr() };
//!     // ... bootstrap the global function table ...
//! }
//! loader.deinitialize();
//! ```
//!
//! A `Loader` is not thread-safe and is neither `Send` nor `Sync`. Callers that need it on
//! several threads must serialize access themselves.

pub mod platform;

pub mod error;
pub use crate::error::Error;

mod backend;
pub use crate::backend::{Backend, LibraryHandle, ProcAddress, SystemBackend};

mod entry;
pub use crate::entry::{GetInstanceProcAddr, PFN_vkVoidFunction, VkInstance, ENTRY_POINT_NAME};

mod loader;
pub use crate::loader::{Loader, LoaderState};
