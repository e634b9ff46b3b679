//! Mutiny CLI entry point.

fn main() {
    std::process::exit(mutiny::run());
}
