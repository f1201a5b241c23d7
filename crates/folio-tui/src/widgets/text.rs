//! Line-building helpers shared by the section widgets

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{fade, Midnight};

/// Widest the readable column gets
const MAX_COLUMN: usize = 96;

/// Left indent and usable width of the content column for a page width
pub fn column(width: u16) -> (usize, usize) {
    let width = width as usize;
    let inner = width.saturating_sub(4).min(MAX_COLUMN).max(1);
    let indent = width.saturating_sub(inner) / 2;
    (indent, inner)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());
            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Spaces that center `text` in `width` columns
pub fn center_pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()) / 2)
}

/// Filled and empty parts of a horizontal bar
pub fn bar(width: usize, fraction: f64) -> (String, String) {
    let filled = ((width as f64) * fraction.clamp(0.0, 1.0)).round() as usize;
    ("█".repeat(filled), "░".repeat(width - filled.min(width)))
}

pub fn blank() -> Line<'static> {
    Line::default()
}

/// Centered section heading: plain words followed by one accented word
pub fn heading(plain: &str, accented: &str, accent: Color, reveal: f64, width: u16) -> Vec<Line<'static>> {
    let text = format!("{} {}", plain, accented);
    let pad = center_pad(&text, width as usize);
    let bold = Modifier::BOLD;
    vec![
        Line::from(vec![
            Span::raw(pad),
            Span::styled(
                format!("{} ", plain),
                Style::default().fg(fade(Midnight::FG0, reveal)).add_modifier(bold),
            ),
            Span::styled(
                accented.to_string(),
                Style::default().fg(fade(accent, reveal)).add_modifier(bold),
            ),
        ]),
        blank(),
    ]
}

/// Indented line of wrapped body text
pub fn body(indent: usize, text: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_splits_long_words_and_keeps_breaks() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_bar_total_width() {
        let (filled, empty) = bar(10, 0.34);
        assert_eq!(filled.chars().count() + empty.chars().count(), 10);
        assert_eq!(filled.chars().count(), 3);
        assert_eq!(bar(4, 2.0).0.chars().count(), 4);
    }

    #[test]
    fn test_column_is_centered() {
        assert_eq!(column(200), (52, 96));
        assert_eq!(column(40), (2, 36));
    }
}
