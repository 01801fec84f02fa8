use std::io;

fn main() {
    sevenpoker_cli::logging::init_logging();
    let code = sevenpoker_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
