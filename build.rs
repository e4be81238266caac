//! Build script to emit a derived cfg flag for the memory regime.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(static_regime)]` instead of
//!   `#[cfg(any(feature = "embedded", feature = "static-pool"))]`

fn main() {
    // Declare the custom cfg name to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(static_regime)");

    // Static pools back the default type aliases under either feature
    #[cfg(any(feature = "embedded", feature = "static-pool"))]
    println!("cargo:rustc-cfg=static_regime");
}
