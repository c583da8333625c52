fn main() {
    if let Err(err) = dayrange_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
