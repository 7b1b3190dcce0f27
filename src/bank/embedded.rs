//! Embedded game data
//!
//! Banks and associations compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/thematic.rs"));
include!(concat!(env!("OUT_DIR"), "/associations.rs"));
