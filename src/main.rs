//! adbcdr main entrypoint.

use adbcdr::run;
use adbcdr::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(&e);
        std::process::exit(1);
    }
}
