mod session;

use std::io;

fn main() -> io::Result<()> {
    // Configure logging
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut stdin.lock(), &mut stdout.lock())
}
