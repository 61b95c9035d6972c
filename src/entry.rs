// vkentry/src/entry.rs
//
//! The Vulkan entry point and the types needed to call it.

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};

/// The symbol resolved from the Vulkan library on every platform.
pub const ENTRY_POINT_NAME: &CStr = c"vkGetInstanceProcAddr";

/// A dispatchable Vulkan instance handle. Null requests global commands.
pub type VkInstance = *mut c_void;

/// The generic function pointer type returned by `vkGetInstanceProcAddr`.
#[allow(non_camel_case_types)]
pub type PFN_vkVoidFunction = Option<unsafe extern "system" fn()>;

/// The signature of `vkGetInstanceProcAddr`.
pub type GetInstanceProcAddr =
    unsafe extern "system" fn(instance: VkInstance, name: *const c_char) -> PFN_vkVoidFunction;

#[cfg(test)]
mod tests {
    use super::ENTRY_POINT_NAME;

    #[test]
    fn entry_point_name_is_nul_terminated_vulkan_symbol() {
        assert_eq!(ENTRY_POINT_NAME.to_bytes_with_nul(), b"vkGetInstanceProcAddr\0");
    }
}
