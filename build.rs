// glerror/build.rs
//
//! The `glerror` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        android: { target_os = "android" },
        ohos: { target_env = "ohos" },
        gles: { any(android, ohos) },
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Both registries carry every error flag, including the stack errors that came back with
    // KHR_debug.
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = if target_os == "android" || target_env == "ohos" {
        Registry::new(Api::Gles2, (3, 2), Profile::Core, Fallbacks::All, [])
    } else {
        Registry::new(Api::Gl, (4, 5), Profile::Core, Fallbacks::All, [])
    };
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
