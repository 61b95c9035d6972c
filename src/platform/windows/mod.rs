// vkentry/src/platform/windows/mod.rs
//
//! The Vulkan loader on Windows, through `LoadLibraryA` and friends.

use crate::{Error, LibraryHandle, ProcAddress};

use log::debug;
use std::ffi::CStr;
use std::os::raw::c_void;
use winapi::shared::minwindef::{FALSE, HMODULE};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA};

/// The Khronos loader DLL, installed into the system directory by GPU drivers.
pub const LIBRARY_NAME: &CStr = c"vulkan-1.dll";

pub(crate) fn open(name: &CStr) -> Result<LibraryHandle, Error> {
    unsafe {
        let module = LoadLibraryA(name.as_ptr());
        match LibraryHandle::new(module as *mut c_void) {
            Some(library) => {
                debug!("Opened {:?} ({:?})", name, library);
                Ok(library)
            }
            None => {
                debug!("LoadLibraryA({:?}) failed: error {}", name, GetLastError());
                Err(Error::NoVulkanLibraryFound)
            }
        }
    }
}

pub(crate) unsafe fn resolve(library: LibraryHandle, symbol: &CStr) -> Result<ProcAddress, Error> {
    let address = GetProcAddress(library.as_ptr() as HMODULE, symbol.as_ptr());
    match ProcAddress::new(address as *mut c_void) {
        Some(address) => Ok(address),
        None => {
            debug!("GetProcAddress({:?}) failed: error {}", symbol, GetLastError());
            Err(Error::EntryPointNotFound)
        }
    }
}

pub(crate) unsafe fn close(library: LibraryHandle) -> Result<(), Error> {
    if FreeLibrary(library.as_ptr() as HMODULE) == FALSE {
        debug!("FreeLibrary({:?}) failed: error {}", library, GetLastError());
        return Err(Error::LibraryCloseFailed);
    }
    Ok(())
}
