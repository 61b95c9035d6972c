// vkentry/src/loader.rs
//
//! The load / resolve / unload lifecycle of the Vulkan library.

use crate::backend::{Backend, LibraryHandle, ProcAddress, SystemBackend};
use crate::entry::ENTRY_POINT_NAME;
use crate::platform::default::LIBRARY_NAME;
use crate::Error;

use log::{debug, warn};
use std::ffi::CStr;

/// How far a loader has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderState {
    /// No library is open.
    Unloaded,
    /// The library is open but the entry point hasn't been resolved, either because nobody has
    /// asked yet or because the library doesn't export it.
    Loaded,
    /// The library is open and the entry point is available.
    Resolved,
}

/// Owns the Vulkan library and the entry point resolved from it.
///
/// There is normally one of these per process, owned by whatever manages the lifetime of the
/// graphics subsystem. A loader is not thread-safe: it holds raw pointers and so is neither `Send`
/// nor `Sync`.
///
/// Dropping a loader closes the library, invalidating every pointer it handed out.
pub struct Loader<B = SystemBackend>
where
    B: Backend,
{
    backend: B,
    library_name: &'static CStr,
    library: Option<LibraryHandle>,
    entry_point: Option<ProcAddress>,
}

impl Loader<SystemBackend> {
    /// Creates a loader for this platform's Vulkan library. Nothing is opened until
    /// `initialize()` is called.
    #[inline]
    pub fn new() -> Loader<SystemBackend> {
        Loader::with_backend(SystemBackend)
    }
}

impl Default for Loader<SystemBackend> {
    #[inline]
    fn default() -> Loader<SystemBackend> {
        Loader::new()
    }
}

impl<B> Loader<B>
where
    B: Backend,
{
    /// Creates a loader that opens this platform's Vulkan library through `backend`.
    #[inline]
    pub fn with_backend(backend: B) -> Loader<B> {
        Loader {
            backend,
            library_name: LIBRARY_NAME,
            library: None,
            entry_point: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_library_name(backend: B, library_name: &'static CStr) -> Loader<B> {
        Loader {
            backend,
            library_name,
            library: None,
            entry_point: None,
        }
    }

    /// Opens the Vulkan library if necessary and returns its `vkGetInstanceProcAddr`.
    ///
    /// Returns `None` if the library can't be opened or doesn't export the entry point. In the
    /// latter case the library stays open, and the next call only retries the lookup.
    ///
    /// Once the entry point is known, further calls return it without touching the library.
    pub fn initialize(&mut self) -> Option<ProcAddress> {
        match self.load() {
            Ok(entry_point) => Some(entry_point),
            Err(error) => {
                debug!("Couldn't initialize Vulkan: {}", error);
                None
            }
        }
    }

    /// Closes the Vulkan library.
    ///
    /// Every pointer obtained through this loader, directly or indirectly, becomes invalid. Does
    /// nothing if the library isn't open. A failure to close is logged and otherwise ignored; the
    /// loader is always `Unloaded` afterward.
    pub fn deinitialize(&mut self) {
        let library = match self.library.take() {
            Some(library) => library,
            None => {
                debug_assert!(self.entry_point.is_none());
                return;
            }
        };
        self.entry_point = None;

        match unsafe { self.backend.close(library) } {
            Ok(()) => debug!("Closed {:?}", self.library_name),
            Err(error) => warn!("Ignoring failure to close {:?}: {}", self.library_name, error),
        }
    }

    #[inline]
    pub fn state(&self) -> LoaderState {
        match self.library {
            None => {
                debug_assert!(self.entry_point.is_none());
                LoaderState::Unloaded
            }
            Some(_) if self.entry_point.is_some() => LoaderState::Resolved,
            Some(_) => LoaderState::Loaded,
        }
    }

    /// Returns the entry point if it has already been resolved, without loading anything.
    #[inline]
    pub fn entry_point(&self) -> Option<ProcAddress> {
        self.entry_point
    }

    /// The file name this loader opens.
    #[inline]
    pub fn library_name(&self) -> &CStr {
        self.library_name
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load(&mut self) -> Result<ProcAddress, Error> {
        if let Some(entry_point) = self.entry_point {
            return Ok(entry_point);
        }

        let library = match self.library {
            Some(library) => library,
            None => {
                let library = self.backend.open(self.library_name)?;
                self.library = Some(library);
                library
            }
        };

        let entry_point = unsafe { self.backend.resolve(library, ENTRY_POINT_NAME)? };
        debug!("Resolved {:?} at {:?}", ENTRY_POINT_NAME, entry_point.as_ptr());
        self.entry_point = Some(entry_point);
        Ok(entry_point)
    }
}

impl<B> Drop for Loader<B>
where
    B: Backend,
{
    fn drop(&mut self) {
        self.deinitialize();
    }
}
