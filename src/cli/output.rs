//! Colored terminal output. `colored` honors NO_COLOR and CLICOLOR[_FORCE].

use std::fmt::Display;

use colored::Colorize;

/// `error: ...` in bold red on stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// `warning: ...` in yellow on stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{} {}", "warning:".yellow(), msg);
}

/// Green label followed by a value, e.g. `created: ./.orgtree.toml`
pub fn action(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Heading above a listing
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// One row of a listing, indented under its header
pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {msg}");
}

/// Chart text or TOML, printed verbatim so it can be piped
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{msg}");
}
