use crate::resolver::Resolution;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_cause(index: usize, message: &str) {
    eprintln!("  {} {}", style(format!("{}:", index)).dim(), message);
}

/// Human readable summary of a resolution
pub fn format_resolution(resolution: &Resolution) -> String {
    if resolution.current_tag.is_empty() {
        format!(
            "{}\n  New tag: {}",
            style("Initial Tag:").bold(),
            style(&resolution.next_tag).green()
        )
    } else {
        format!(
            "{}\n  From: {}\n  To:   {}",
            style("Next Tag:").bold(),
            style(&resolution.current_tag).red(),
            style(&resolution.next_tag).green()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_initial_resolution() {
        let resolution = Resolution {
            current_tag: String::new(),
            next_tag: "v0.0.1".to_string(),
            next_version: "0.0.1".to_string(),
        };
        let text = console::strip_ansi_codes(&format_resolution(&resolution)).to_string();
        assert_eq!(text, "Initial Tag:\n  New tag: v0.0.1");
    }

    #[test]
    fn test_format_next_resolution() {
        let resolution = Resolution {
            current_tag: "v7".to_string(),
            next_tag: "v8".to_string(),
            next_version: "8".to_string(),
        };
        let text = console::strip_ansi_codes(&format_resolution(&resolution)).to_string();
        assert_eq!(text, "Next Tag:\n  From: v7\n  To:   v8");
    }
}
