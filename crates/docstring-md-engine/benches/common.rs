// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_docstring(sections: usize) -> String {
    let mut content = String::from("\n    Summary line for a generated module.\n\n");

    for section in 0..sections {
        content.push_str(&format!("    ## Section {section}\n\n"));
        content.push_str("    Some paragraph content describing the section.\n\n");
        content.push_str(&format!("    ### How does part {section} work?\n\n"));
        content.push_str("        >>> value = compute(1, 2)\n");
        content.push_str("        >>> value\n");
        content.push_str("        3\n\n");
        content.push_str("        >>> def helper(x):\n");
        content.push_str("        ...     return x * 2\n\n");
        content.push_str("        $ run --verbose\n");
        content.push_str("        done\n\n");
    }

    content
}
