/// Prints every process the current user can open, one per line.
#[cfg(windows)]
pub fn execute() {
    use shroud_core::ProcessEntry;

    let mut list = shroud_windows::ProcessList::new();
    if let Err(e) = list.refresh() {
        eprintln!("Error: could not enumerate processes: {e}");
        std::process::exit(1);
    }

    println!("{:>8}  {:<32}  Path", "PID", "Process");
    for record in list.iter() {
        println!(
            "{:>8}  {:<32}  {}",
            record.pid(),
            record.display_name(),
            record.executable_path()
        );
    }
    println!("\n{} processes found", list.len());
}

#[cfg(not(windows))]
pub fn execute() {
    super::requires_windows();
}
