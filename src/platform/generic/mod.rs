// vkentry/src/platform/generic/mod.rs
//
//! Backend pieces shared between platforms.

pub(crate) mod dl;
