//! Terminal and JSON rendering helpers shared by the CLI commands

/// Terminal styles, one per kind of value. `colored` honours NO_COLOR.
pub mod colors {
    use colored::{ColoredString, Colorize};

    macro_rules! style {
        ($($name:ident => $($method:ident).+;)*) => {
            $(
                pub fn $name(s: &str) -> ColoredString {
                    s.$($method()).+
                }
            )*
        };
    }

    style! {
        label => bold;
        file_path => blue;
        number => yellow;
        success => green;
        warning => yellow;
        error => red.bold;
        dim => dimmed;
        score => magenta;
        rank => green.bold;
    }
}

/// Format a millisecond duration into a human-readable string
pub fn format_duration_ms(ms: u64) -> String {
    let secs = ms as f64 / 1000.0;
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        format!("{ms}ms")
    }
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let mins = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// First `max_lines` lines of `text`, each cut to `max_chars` characters
pub fn snippet(text: &str, max_lines: usize, max_chars: usize) -> Vec<String> {
    text.lines()
        .take(max_lines)
        .map(|line| {
            if line.chars().count() > max_chars {
                let cut: String = line.chars().take(max_chars.saturating_sub(3)).collect();
                format!("{cut}...")
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Print a value as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Warnings and errors are written to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
