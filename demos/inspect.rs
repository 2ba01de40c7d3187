//! Prints a small property report for a handful of code points.
//!
//! Run with `cargo run --example inspect`.

use chardb::NameFlags;

fn report(c: u32) {
    println!(
        "{} {}",
        chardb::as_hex(c),
        chardb::char_name(c, NameFlags::CONTROL | NameFlags::LABEL)
    );
    println!(
        "  category {} ({}), bidi {}, script {}, block {:?}",
        chardb::general_category(c),
        chardb::general_category(c).long_name(),
        chardb::bidi_class(c),
        chardb::script(c),
        chardb::block_name(c),
    );
    let decomp = chardb::compatibility_decomposition(c);
    if !decomp.is_empty() {
        let parts: Vec<String> = decomp.iter().map(|&d| chardb::as_hex(d)).collect();
        println!("  decomposes to {}", parts.join(" "));
    }
    let folded = chardb::full_casefold(c);
    if folded.as_slice() != [c] {
        let parts: Vec<String> = folded.iter().map(|&d| chardb::as_hex(d)).collect();
        println!("  case-folds to {}", parts.join(" "));
    }
}

fn main() {
    for c in [0x41, 0xDF, 0x3B1, 0x0640, 0x4E2D, 0xAC01, 0xD4DB, 0xFB03, 0x1F600, 0x20FF] {
        report(c);
    }
}
