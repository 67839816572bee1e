//! Display style helpers.
//!
//! Bug colors shade linearly from white at size zero to pure red at size 255
//! and beyond.

use ratatui::style::Color;

pub fn bug_color(size: f64) -> Color {
    let shade = 255 - size.clamp(0.0, 255.0) as u8;
    Color::Rgb(255, shade, shade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_white() {
        assert_eq!(bug_color(0.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_full_size_is_red() {
        assert_eq!(bug_color(255.0), Color::Rgb(255, 0, 0));
        assert_eq!(bug_color(1000.0), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_intermediate_size_is_pink() {
        assert_eq!(bug_color(80.0), Color::Rgb(255, 175, 175));
    }
}
