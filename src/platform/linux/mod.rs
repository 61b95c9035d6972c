// vkentry/src/platform/linux/mod.rs
//
//! The Vulkan loader on desktop Linux and other non-Android Unix systems built as `linux`.

use super::generic::dl;
use crate::{Error, LibraryHandle};

use libc::{c_int, RTLD_LAZY, RTLD_LOCAL};
use std::ffi::CStr;

pub(crate) use dl::{close, resolve};

/// The versioned soname shipped by the Khronos loader. The unversioned `libvulkan.so` is
/// usually only present with development packages.
pub const LIBRARY_NAME: &CStr = c"libvulkan.so.1";

// Keep the driver's symbols out of the global namespace.
const OPEN_FLAGS: c_int = RTLD_LAZY | RTLD_LOCAL;

pub(crate) fn open(name: &CStr) -> Result<LibraryHandle, Error> {
    dl::open(name, OPEN_FLAGS)
}
