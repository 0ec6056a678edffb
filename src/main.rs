use clap::Parser;

fn main() {
    let cli = nava::cli::Cli::parse();
    if let Err(e) = nava::cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
