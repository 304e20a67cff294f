use colored::*;
use tracing::info;

use crate::terminal::{colors, logging::PRINT_TARGET};

const KEY_WIDTH: usize = 8;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Host name line above the detail tree.
pub fn host_line(name: &str) {
    print(&format!("{} {}", "»".color(colors::SEPARATOR), name.color(colors::PRIMARY).bold()));
}

/// One `key....: value` row per detail, the last one closing the branch.
pub fn details(rows: &[(String, ColoredString)]) {
    for (i, (key, value)) in rows.iter().enumerate() {
        print(&detail_row(key, value, i + 1 == rows.len()));
    }
}

fn detail_row(key: &str, value: &ColoredString, last: bool) -> String {
    let branch: &str = if last { "└─" } else { "├─" };
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
    format!(
        " {} {}{}: {}",
        branch.color(colors::SEPARATOR),
        key.color(colors::TEXT_DEFAULT),
        dots.color(colors::SEPARATOR),
        value
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
