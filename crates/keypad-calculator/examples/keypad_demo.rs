//! Keypad Demo
//!
//! Drives a calculator through a few key sequences and prints every
//! notification. State transitions are logged through `tracing`.
//!
//! Run with: RUST_LOG=keypad_calculator=debug cargo run --example keypad_demo

#![allow(clippy::unwrap_used)]

use keypad_calculator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let calc = Calculator::new();
    let sub = calc.subscribe(|key, display, value| {
        println!("   [{key}]  display={display:<12} value={value}");
    });

    for sequence in ["12/2/", "=", "*3=", "1.5+.5=", "10/0="] {
        println!("\nKeys: {sequence}");
        calc.press_str(sequence).unwrap();
        println!("   buffer: '{}'", calc.buffer());
    }

    sub.unsubscribe();

    println!("\nTape:");
    for entry in calc.history().iter() {
        println!("   {}", entry.display());
    }
    println!("\nSnapshot: {}", serde_json::to_string(&calc.snapshot()).unwrap());
}
