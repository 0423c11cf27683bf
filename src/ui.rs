use console::Style;

/// Entropy at or above this is colored as strong in verbose output.
pub const MIN_SAFE_ENTROPY: f64 = 72.0;

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn is_safe_entropy(bits: f64) -> bool {
    bits >= MIN_SAFE_ENTROPY
}

pub fn report_word_count(count: usize, color_support: bool) {
    let style = if color_support {
        Style::new().green()
    } else {
        Style::new()
    };

    eprintln!("{} words loaded.", style.apply_to(count));
}

pub fn report_entropy(bits: f64, color_support: bool) {
    let style = if color_support {
        if is_safe_entropy(bits) {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };

    eprintln!(
        "Password has ~{} bits of entropy.",
        style.apply_to(format_bits(bits))
    );
}

fn format_bits(bits: f64) -> String {
    format!("{:.2}", bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_two_decimals() {
        assert_eq!(format_bits(8.0), "8.00");
        assert_eq!(format_bits(77.5489), "77.55");
        assert_eq!(format_bits(0.0), "0.00");
    }

    #[test]
    fn test_safe_entropy_threshold() {
        assert!(is_safe_entropy(MIN_SAFE_ENTROPY));
        assert!(is_safe_entropy(128.0));
        assert!(!is_safe_entropy(MIN_SAFE_ENTROPY - 0.01));
    }
}
