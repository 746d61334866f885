/// Shortens `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Pads `text` with spaces to `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Wraps `text` in an ANSI colour escape.
pub fn paint(text: &str, ansi_code: &str) -> String {
    format!("\x1b[{ansi_code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_keeps_short_text() {
        assert_eq!(truncate_chars("SERVICIO", 20), "SERVICIO");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("RENOVACIÓN E INSTALACIÓN", 11), "RENOVACIÓN…");
    }

    #[test]
    fn pad_right_fills_to_width() {
        assert_eq!(pad_right("día", 5), "día  ");
        assert_eq!(pad_right("amarillo", 4), "amarillo");
    }

    #[test]
    fn paint_wraps_with_reset() {
        assert_eq!(paint("rojo", "31"), "\x1b[31mrojo\x1b[0m");
    }
}
