use std::io::{self, IsTerminal, Write};

/// Ask a yes/no question on stderr. Anything but `y`/`yes` is a no.
///
/// Fails instead of blocking when stdin or stderr is not a terminal.
pub fn confirm(message: &str) -> io::Result<bool> {
  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    return Err(io::Error::other(
      "Cannot prompt for confirmation in non-interactive mode. Use --force to proceed.",
    ));
  }

  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
