pub mod init;
pub mod list;
pub mod visibility;
pub mod watch;

/// Prints the standard refusal on non-Windows targets and exits.
#[cfg(not(windows))]
pub fn requires_windows() -> ! {
    eprintln!("shroud requires Windows.");
    std::process::exit(1);
}
