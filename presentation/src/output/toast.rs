//! Console toasts

use colored::Colorize;
use inorbit_application::ToastNotifier;

/// Prints toasts to the terminal
///
/// Success goes to stdout, errors to stderr.
pub struct ConsoleToaster;

impl ConsoleToaster {
    pub fn format_success(message: &str) -> String {
        format!("{} {}", "✔".green().bold(), message.green())
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "✖".red().bold(), message.red())
    }
}

impl ToastNotifier for ConsoleToaster {
    fn success(&self, message: &str) {
        println!("{}", Self::format_success(message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", Self::format_error(message));
    }
}
