//! Stderr notices that are not errors.

use std::io::Write;

/// Writes `WARNING: <message>` as its own line.
///
/// `play` uses this to announce a generated seed so the game can be replayed.
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}
