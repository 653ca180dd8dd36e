use clap::Args;

#[derive(Args)]
pub struct WatchArgs {
    /// PID of the target process
    #[arg(long, conflicts_with = "name")]
    pub pid: Option<u32>,

    /// Executable name of the target (case-insensitive substring match)
    #[arg(long)]
    pub name: Option<String>,

    /// Hotkey to watch, overriding the configured one
    #[arg(long)]
    pub key: Option<String>,
}

/// Arms the hotkey and toggles the target's windows until Ctrl+C.
///
/// Each press of the hotkey flips between hiding and showing every
/// top-level window of the target process. On exit the windows are
/// shown again if the last press left them hidden.
#[cfg(windows)]
pub fn execute(args: &WatchArgs) {
    use std::sync::mpsc;
    use std::time::Duration;

    use shroud_core::{HookEvent, Key, config, log};
    use shroud_windows::visibility::{hide_process_windows, show_process_windows};
    use shroud_windows::{KeyboardHook, ctrl_c, is_process_alive};

    let config = config::load();
    log::init(&config.log);

    let key_name = args.key.as_deref().unwrap_or(&config.hotkey.key);
    let key: Key = match key_name.parse() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let (pid, label) = resolve_target(args);
    if !is_process_alive(pid) {
        eprintln!("Error: no running process with PID {pid}.");
        std::process::exit(1);
    }

    let mut hook = KeyboardHook::new();
    let events = hook.subscribe();

    let (ctrl_tx, ctrl_rx) = mpsc::channel();
    if let Err(e) = ctrl_c::install(ctrl_tx) {
        eprintln!("Error: could not install the Ctrl+C handler: {e}");
        std::process::exit(1);
    }

    hook.set_hook(key);

    println!("Watching {key} — each press toggles the windows of {label} (PID {pid}).");
    println!("Press Ctrl+C to quit.");

    let mut hidden = false;
    loop {
        if ctrl_rx.try_recv().is_ok() {
            break;
        }

        match events.recv_timeout(Duration::from_millis(200)) {
            Ok(HookEvent::KeyMatched(_)) => {
                let result = if hidden {
                    show_process_windows(i64::from(pid))
                } else {
                    hide_process_windows(i64::from(pid))
                };
                match result {
                    Ok(affected) => {
                        hidden = next_hidden(hidden, affected);
                        if affected == 0 {
                            println!("Nothing to toggle.");
                        } else {
                            println!("{}", if hidden { "Hidden." } else { "Shown." });
                        }
                    }
                    Err(e) => {
                        // The target died; nothing left to toggle.
                        eprintln!("Error: {e}");
                        break;
                    }
                }
            }
            Ok(HookEvent::InstallFailed(code)) => {
                eprintln!("Error: keyboard hook installation failed (code {code}).");
                std::process::exit(1);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Never leave the target invisible behind us.
    if hidden && is_process_alive(pid) {
        let _ = show_process_windows(i64::from(pid));
        println!("Restored the target's windows.");
    }
    hook.stop_hook();
}

/// Next value of the watch loop's hidden flag after a toggle pass.
///
/// A pass that changed no windows keeps the current state, so a press
/// on a windowless target never claims its windows were hidden.
#[cfg_attr(not(windows), allow(dead_code))]
fn next_hidden(hidden: bool, affected: usize) -> bool {
    if affected > 0 { !hidden } else { hidden }
}

/// Resolves `--pid`/`--name` to a concrete PID and a printable label.
#[cfg(windows)]
fn resolve_target(args: &WatchArgs) -> (u32, String) {
    use shroud_core::ProcessEntry;

    if let Some(pid) = args.pid {
        return (pid, format!("PID {pid}"));
    }

    let Some(name) = args.name.as_deref() else {
        eprintln!("Error: specify a target with --pid or --name.");
        std::process::exit(1);
    };

    let mut list = shroud_windows::ProcessList::new();
    if let Err(e) = list.refresh() {
        eprintln!("Error: could not enumerate processes: {e}");
        std::process::exit(1);
    }

    let Some(record) = list.find_by_name(name) else {
        eprintln!("Error: no running process matches {name:?}.");
        std::process::exit(1);
    };

    let pid = record.pid();
    let label = record.display_name();
    match u32::try_from(pid) {
        Ok(pid) if pid != 0 => (pid, label),
        _ => {
            eprintln!("Error: process {label:?} has no usable PID.");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute(_args: &WatchArgs) {
    super::requires_windows();
}
