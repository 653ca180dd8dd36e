/// A boxed error type for operations that touch the OS.
///
/// Any error type that implements the `Error` trait can be boxed into
/// this. Failures surfaced through it are always recoverable; the
/// worst outcome anywhere in this crate family is "operation had no
/// effect".
pub type ShroudResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic, read-only view of one running process.
///
/// The platform crate (e.g. `shroud-windows`) provides the
/// implementation backed by an OS process handle.
pub trait ProcessEntry {
    /// Returns the process ID, or -1 if the underlying handle is invalid.
    fn pid(&self) -> i64;

    /// Returns the full path of the backing executable.
    ///
    /// Empty when the lookup fails (process exited, insufficient
    /// rights). Not fatal — `display_name` degrades gracefully.
    fn executable_path(&self) -> String;

    /// Returns a human-readable name for the process.
    ///
    /// The file-name component of the executable path, or a
    /// synthesized fallback when the path cannot be resolved.
    fn display_name(&self) -> String {
        // Split on both separators by hand; std::path treats `\` as a
        // separator only on Windows, and paths reported by the OS may
        // be inspected from tests running elsewhere.
        let path = self.executable_path();
        match path.rsplit(['\\', '/']).next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Unknown Process (PID: {})", self.pid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEntry {
        pid: i64,
        path: &'static str,
    }

    impl ProcessEntry for FakeEntry {
        fn pid(&self) -> i64 {
            self.pid
        }

        fn executable_path(&self) -> String {
            self.path.into()
        }
    }

    #[test]
    fn display_name_is_file_name_component() {
        // Arrange
        let entry = FakeEntry {
            pid: 4821,
            path: r"C:\Program Files\App\app.exe",
        };

        // Assert
        assert_eq!(entry.display_name(), "app.exe");
    }

    #[test]
    fn display_name_falls_back_when_path_is_empty() {
        // Arrange
        let entry = FakeEntry { pid: 4821, path: "" };

        // Assert
        assert_eq!(entry.display_name(), "Unknown Process (PID: 4821)");
    }
}
