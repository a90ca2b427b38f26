//! hrtime main entrypoint.

use hrtime::run;

fn main() {
    if let Err(e) = run() {
        hrtime::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
