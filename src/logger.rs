use chrono::Utc;
use colored::*;
use std::io::{ self, Write };

pub struct Logger;

impl Logger {
    // Basic log levels with proper formatting
    pub fn info(message: &str) {
        let timestamp = Self::get_timestamp();
        println!("{} {} {}", "ℹ".blue().bold(), format!("[{}]", timestamp).dimmed(), message);
        io::stdout().flush().ok();
    }

    pub fn warn(message: &str) {
        let timestamp = Self::get_timestamp();
        println!(
            "{} {} {}",
            "⚠".yellow().bold(),
            format!("[{}]", timestamp).dimmed(),
            message.yellow()
        );
        io::stdout().flush().ok();
    }

    pub fn error(message: &str) {
        let timestamp = Self::get_timestamp();
        println!("{} {} {}", "❌".red().bold(), format!("[{}]", timestamp).dimmed(), message.red());
        io::stdout().flush().ok();
    }

    pub fn success(message: &str) {
        let timestamp = Self::get_timestamp();
        println!(
            "{} {} {}",
            "✅".green().bold(),
            format!("[{}]", timestamp).dimmed(),
            message.green()
        );
        io::stdout().flush().ok();
    }

    fn get_timestamp() -> String {
        Utc::now().format("%H:%M:%S").to_string()
    }
}
