// vkentry/src/backend.rs
//
//! The dynamic-loading capability the loader is built on.

use crate::entry::GetInstanceProcAddr;
use crate::platform::default as native;
use crate::Error;

use std::ffi::CStr;
use std::mem;
use std::os::raw::c_void;
use std::ptr::NonNull;

/// An opaque reference to an opened dynamic library.
///
/// Holding one doesn't keep the library alive; whoever opened it decides when it is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibraryHandle(NonNull<c_void>);

impl LibraryHandle {
    /// Wraps a raw handle returned by the platform loader, or returns `None` if it is null.
    #[inline]
    pub fn new(handle: *mut c_void) -> Option<LibraryHandle> {
        NonNull::new(handle).map(LibraryHandle)
    }

    #[inline]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// The address of a function resolved from a dynamic library.
///
/// The address is only meaningful while the library it came from stays open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcAddress(NonNull<c_void>);

impl ProcAddress {
    /// Wraps a raw symbol address, or returns `None` if it is null.
    #[inline]
    pub fn new(address: *mut c_void) -> Option<ProcAddress> {
        NonNull::new(address).map(ProcAddress)
    }

    #[inline]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }

    /// Reinterprets this address as `vkGetInstanceProcAddr`.
    ///
    /// # Safety
    ///
    /// The address must really be the Vulkan entry point, and the library it was resolved from
    /// must still be open whenever the returned function is called. Nothing about the signature
    /// is checked.
    #[inline]
    pub unsafe fn to_get_instance_proc_addr(self) -> GetInstanceProcAddr {
        mem::transmute::<*mut c_void, GetInstanceProcAddr>(self.0.as_ptr())
    }
}

/// Opens libraries, looks up symbols in them, and closes them again.
///
/// `SystemBackend` is the implementation for the platform being compiled for. The loader only
/// ever passes handles back to the backend that produced them.
pub trait Backend {
    /// Opens the library with the given file name.
    fn open(&self, name: &CStr) -> Result<LibraryHandle, Error>;

    /// Looks up an exported symbol.
    ///
    /// # Safety
    ///
    /// `library` must have come from `open` on this backend and must not have been closed.
    unsafe fn resolve(&self, library: LibraryHandle, symbol: &CStr) -> Result<ProcAddress, Error>;

    /// Closes a library.
    ///
    /// # Safety
    ///
    /// `library` must have come from `open` on this backend and must not have been closed. Every
    /// address resolved from it becomes dangling.
    unsafe fn close(&self, library: LibraryHandle) -> Result<(), Error>;
}

/// The platform's own dynamic loader, selected when the crate is built.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBackend;

impl Backend for SystemBackend {
    #[inline]
    fn open(&self, name: &CStr) -> Result<LibraryHandle, Error> {
        native::open(name)
    }

    #[inline]
    unsafe fn resolve(&self, library: LibraryHandle, symbol: &CStr) -> Result<ProcAddress, Error> {
        native::resolve(library, symbol)
    }

    #[inline]
    unsafe fn close(&self, library: LibraryHandle) -> Result<(), Error> {
        native::close(library)
    }
}
