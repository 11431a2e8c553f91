use colored::Colorize;

/// Truncate long free text for table display.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Format timestamp in human-readable format
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Prompt user for yes/no confirmation
pub fn confirm_action(prompt: &str) -> bool {
    use std::io::{self, Write};

    print!("{} (y/N): ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width).dimmed());
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    println!("{}", row.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer piece of text", 10), "a longer …");
    }
}
