use std::io;

use anyhow::Result;
use numsys::menu::{self, LineSource};
use numsys::{demo, Session};

fn main() -> Result<()> {
    env_logger::init();

    let mut stdout = io::stdout();
    demo::run(&mut stdout)?;

    let mut rl = menu::line_editor()?;
    if rl.read_line("\nPress Enter to start interactive menu...", &[])?.is_none() {
        return Ok(());
    }

    Session::new(rl, stdout).run()
}
