//! CLI subcommand implementations.

pub mod logs;
pub mod orgs;
pub mod roles;
pub mod users;

/// Prints where the next checkpoint page starts, if there is one.
pub(crate) fn print_next_cursor(cursor: Option<&str>) {
    if let Some(cursor) = cursor {
        eprintln!("More results: rerun with --from {}", cursor);
    }
}
