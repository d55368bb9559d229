use std::io;

fn main() {
    twocard_cli::logging::init_logging();
    let code = twocard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
