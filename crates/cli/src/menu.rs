//! Header, menu, and input prompts for the interactive loop.

use std::io::{self, Write};

pub fn print_header() {
    println!();
    println!("==================================================");
    println!("        ENVIRONMENTAL MONITORING - CLI v1.0       ");
    println!("==================================================");
}

pub fn print_menu() {
    println!();
    println!("[1] Fetch & Log Current Data");
    println!("[2] Show Latest Readings");
    println!("[3] Query Historical Data");
    println!("[4] Set Safety Thresholds");
    println!("[5] View Health & Safety Tips");
    println!("[6] Exit");
    println!("{}", "-".repeat(50));
}

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
