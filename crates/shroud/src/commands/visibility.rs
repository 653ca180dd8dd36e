/// Which way the one-shot `hide`/`show` subcommands move visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hide,
    Show,
}

pub use self::Mode::{Hide, Show};

/// Applies `mode` to every top-level window of `pid`, once.
#[cfg(windows)]
pub fn execute(pid: u32, mode: Mode) {
    let result = match mode {
        Mode::Hide => shroud_windows::visibility::hide_process_windows(i64::from(pid)),
        Mode::Show => shroud_windows::visibility::show_process_windows(i64::from(pid)),
    };

    match result {
        Ok(0) => println!("No windows of PID {pid} needed changing."),
        Ok(affected) => {
            let verb = match mode {
                Mode::Hide => "Hid",
                Mode::Show => "Showed",
            };
            println!("{verb} {affected} window(s) of PID {pid}.");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute(_pid: u32, _mode: Mode) {
    super::requires_windows();
}
