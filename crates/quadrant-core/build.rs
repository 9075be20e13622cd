// File: crates/quadrant-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW come from advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
