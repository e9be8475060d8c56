//! Office Designer: a 2D floor plan and a first-person walkthrough of the
//! same room. Press V to switch views, Escape to quit.

use office_designer::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
