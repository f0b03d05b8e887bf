//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vivaha_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("vivaha_core ping={}", vivaha_core::ping());
    println!("vivaha_core version={}", vivaha_core::core_version());
}
