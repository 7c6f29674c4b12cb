use clap::Parser;

use modifier_keys::logging::init_tracing;

/// Print the keyboard modifier keys currently held down.
#[derive(Debug, Parser)]
#[command(name = "modifier-keys", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics only; a broken log setup must not change the result.
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let stdout = std::io::stdout();
    if let Err(e) = modifier_keys::run(&mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
