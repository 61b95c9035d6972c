// vkentry/src/error.rs
//
//! Various errors that loading the Vulkan entry point can produce.
//!
//! None of these reach the caller of `Loader::initialize`, which only reports success or failure.
//! They exist so the loader and its backends can log what went wrong.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that loading the Vulkan entry point can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The system Vulkan library couldn't be located or opened.
    ///
    /// This usually means no Vulkan driver is installed, or the installed one is incompatible
    /// with this process.
    NoVulkanLibraryFound,
    /// The Vulkan library was opened, but it doesn't export `vkGetInstanceProcAddr`.
    EntryPointNotFound,
    /// The platform reported a failure while closing the Vulkan library.
    LibraryCloseFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::NoVulkanLibraryFound => f.write_str("the Vulkan library couldn't be opened"),
            Error::EntryPointNotFound => {
                f.write_str("the Vulkan library doesn't export vkGetInstanceProcAddr")
            }
            Error::LibraryCloseFailed => f.write_str("the Vulkan library couldn't be closed"),
        }
    }
}

impl error::Error for Error {}
