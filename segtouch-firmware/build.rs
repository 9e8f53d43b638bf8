//! Build script for segtouch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Adds the cortex-m-rt and defmt linker scripts

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    setup_linker();
}

/// Copy memory.x next to the build output and link against it
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
