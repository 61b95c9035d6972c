// vkentry/src/platform/generic/dl.rs
//
//! Library loading through the POSIX `dlopen` family.

use crate::{Error, LibraryHandle, ProcAddress};

use libc::{c_int, dlclose, dlerror, dlopen, dlsym};
use log::debug;
use std::borrow::Cow;
use std::ffi::CStr;

pub(crate) fn open(name: &CStr, flags: c_int) -> Result<LibraryHandle, Error> {
    unsafe {
        let handle = dlopen(name.as_ptr(), flags);
        match LibraryHandle::new(handle) {
            Some(library) => {
                debug!("Opened {:?} ({:?})", name, library);
                Ok(library)
            }
            None => {
                debug!("dlopen({:?}) failed: {}", name, last_error());
                Err(Error::NoVulkanLibraryFound)
            }
        }
    }
}

pub(crate) unsafe fn resolve(library: LibraryHandle, symbol: &CStr) -> Result<ProcAddress, Error> {
    // A null symbol is only an error if dlerror() says so, but null is useless to us either way.
    dlerror();
    let address = dlsym(library.as_ptr(), symbol.as_ptr());
    match ProcAddress::new(address) {
        Some(address) => Ok(address),
        None => {
            debug!("dlsym({:?}) failed: {}", symbol, last_error());
            Err(Error::EntryPointNotFound)
        }
    }
}

pub(crate) unsafe fn close(library: LibraryHandle) -> Result<(), Error> {
    if dlclose(library.as_ptr()) != 0 {
        debug!("dlclose({:?}) failed: {}", library, last_error());
        return Err(Error::LibraryCloseFailed);
    }
    Ok(())
}

fn last_error() -> Cow<'static, str> {
    unsafe {
        let message = dlerror();
        if message.is_null() {
            Cow::Borrowed("no error reported")
        } else {
            Cow::Owned(CStr::from_ptr(message).to_string_lossy().into_owned())
        }
    }
}
