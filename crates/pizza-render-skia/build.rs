// File: crates/pizza-render-skia/build.rs
// Summary: Windows-only link step; Skia's font manager and ICU read the registry via advapi32.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
