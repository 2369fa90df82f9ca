//! Print the full elimination trace for a few small systems.
//!
//! Usage:
//!     RUST_LOG=debug cargo run --example trace_demo

use math_audio_elimination::{RenderConfig, inverse, lu, render_reduction, rref, solve};
use ndarray::array;

fn main() {
    env_logger::init();

    let config = RenderConfig::default();

    println!("=== RREF ===");
    let m = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]];
    println!("{}", render_reduction(&rref(&m), &config));

    println!("=== LU ===");
    let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
    match lu(&a) {
        Ok(dec) => println!("{}", dec),
        Err(e) => println!("LU failed: {}", e),
    }

    println!("=== Solve ===");
    let systems = [
        (array![[2.0, 1.0], [5.0, 3.0]], array![1.0, 2.0]),
        (array![[1.0, 2.0], [2.0, 4.0]], array![1.0, 3.0]),
    ];
    for (a, b) in &systems {
        match solve(a, b) {
            Ok(solution) => println!("{}", solution),
            Err(e) => println!("solve failed: {}", e),
        }
    }

    println!("=== Inverse ===");
    for m in [array![[4.0, 7.0], [2.0, 6.0]], array![[1.0, 2.0], [2.0, 4.0]]] {
        match inverse(&m) {
            Ok(inv) => println!("{}", inv),
            Err(e) => println!("no inverse: {}", e),
        }
    }
}
