//! Basic usage example for indicpostal.
//!
//! Demonstrates the core functionality of the library:
//! - Formatting a raw address into its canonical form
//! - Inspecting the classified components
//! - Formatting a small batch
//!
//! Run with: cargo run --example basic_usage

use indicpostal::{AddressFormatter, format_address, parse_address};

fn main() {
    println!("indicpostal Basic Usage Example");
    println!("===============================\n");

    // Example 1: Canonical formatting
    println!("1. Canonical Formatting");
    println!("-----------------------");

    let raw = "door no 12, mg road, bangalore, karnataka 560001";
    println!("Input:  {raw}");
    println!("Output: {}\n", format_address(raw));

    // Example 2: Structured components
    println!("2. Structured Components");
    println!("------------------------");

    let components = parse_address("FLAT NO 3B\nABC APARTMENT\nNEAR CITY HOSPITAL\nCHENNAI");
    println!("Identifiers: {:?}", components.identifiers);
    if let Some(building) = &components.building {
        println!("Building: {building}");
    }
    if let Some(city) = &components.city {
        println!("City: {city}");
    }
    println!();

    // Example 3: Batch formatting
    println!("3. Batch Formatting");
    println!("-------------------");

    let formatter = AddressFormatter::new();
    let raws = [
        "#45, 1st flr, opp sbi atm, ks colony, hyderabad",
        "sy no 10/2a, nr dtdc office, pune, maharashtra 411001",
    ];
    for (raw, formatted) in raws.iter().zip(formatter.format_batch(&raws)) {
        println!("{raw}");
        println!("  -> {formatted}");
    }
}
