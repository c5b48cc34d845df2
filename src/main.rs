//! Method location and call-reference index for source trees.
//!
//! Binary crate entry point. All CLI logic is in the `cli` module.

// mimalloc aggressively returns freed pages to the OS; parse trees for large
// source sets churn a lot of small allocations.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;

fn main() {
    cli::run();
}
