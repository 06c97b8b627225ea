use crate::domain::Version;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Show the computed transition as a from/to pair.
pub fn display_transition(current: &Version, next: &Version) {
    println!("\n\x1b[1mVersion Transition:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", current);
    println!("  To:   \x1b[32m{}\x1b[0m", next);
}

/// Show the full manifest document a dry run would have written.
pub fn display_dry_run(manifest_path: &str, rendered: &str) {
    display_status(&format!(
        "Dry run: {} left untouched, would become:",
        manifest_path
    ));
    print!("{}", rendered);
}
