//! Embedded default catalogue
//!
//! The default practice list compiled into the binary at build time.

// Include generated catalogue from build script
include!(concat!(env!("OUT_DIR"), "/catalogue.rs"));
