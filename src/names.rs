/// Name list compiled into the binary, greeted when the command line
/// supplies no names of its own.
pub const DEFAULT_NAMES: &[&str] = &["Alice", "Bob", "Carol"];
