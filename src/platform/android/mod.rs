// vkentry/src/platform/android/mod.rs
//
//! The Vulkan loader on Android.

use super::generic::dl;
use crate::{Error, LibraryHandle};

use libc::{c_int, RTLD_LOCAL, RTLD_NOW};
use std::ffi::CStr;

pub(crate) use dl::{close, resolve};

/// The system loader in `/system/lib*`. Android never ships a versioned soname for it.
pub const LIBRARY_NAME: &CStr = c"libvulkan.so";

// Bionic ignores RTLD_LAZY and always binds immediately, so ask for that explicitly.
const OPEN_FLAGS: c_int = RTLD_NOW | RTLD_LOCAL;

pub(crate) fn open(name: &CStr) -> Result<LibraryHandle, Error> {
    dl::open(name, OPEN_FLAGS)
}
