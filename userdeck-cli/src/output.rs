// Output formatting helpers for CLI commands

use user_service::User;

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("\x1b[36m  i\x1b[0m {}", message);
}

/// Print a dim/muted message
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

/// One row of the user table, on stdout so it can be piped
pub fn user_row(user: &User) {
    println!("{:>6}  {:<24}  {}", user.id, user.username, user.email);
}

pub fn user_table_header() {
    println!("{:>6}  {:<24}  {}", "ID", "USERNAME", "EMAIL");
}
