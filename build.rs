// vkentry/build.rs
//
//! The `vkentry` build script.

use cfg_aliases::cfg_aliases;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        android: { target_os = "android" },
        linux: { all(target_os = "linux", not(android)) },
    }
}
