use std::env;
use std::process;

mod cli;
mod pass;
mod rand;

fn main() {
    // Passwords pass through this process; keep them out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(&args));
}
