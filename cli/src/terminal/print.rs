use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Turns colors off when stdout is not a terminal.
pub fn initialize() {
    if !console::Term::stdout().is_term() {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `═══⟦ TITLE ⟧═══`, centred in [`TOTAL_WIDTH`] columns.
pub fn titled_rule(title: &str) {
    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let fill: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&label));
    let left: String = "═".repeat(fill / 2);
    let right: String = "═".repeat(fill - fill / 2);

    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn banner() {
    titled_rule(&format!("shout v{}", env!("CARGO_PKG_VERSION")));
}

/// Prints `> key....: value`, padding keys to `key_width`.
pub fn field(key: &str, value: ColoredString, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        format!("{dots}:").color(colors::SEPARATOR),
        value
    ));
}
