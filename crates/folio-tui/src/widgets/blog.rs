use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, BLOG_POSTS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

/// Excerpts are clamped to this many rows, titles to two
const EXCERPT_ROWS: usize = 3;
const TITLE_ROWS: usize = 2;

pub struct BlogSection;

impl BlogSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Blog, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Latest", "Articles", Midnight::BLUE, title, width));

        let text_width = inner.saturating_sub(2);
        for (i, post) in BLOG_POSTS.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Blog, card_stagger(i));
            let tone = accent(post.accent);
            let pad = Span::raw(" ".repeat(indent));

            lines.push(Line::from(vec![
                pad.clone(),
                Span::styled(
                    format!(" {} ", post.category),
                    Style::default().fg(fade(tone, p)).bg(fade(Midnight::BG2, p)),
                ),
                Span::styled(
                    format!("  {}  ·  {}", post.date, post.read_time),
                    Style::default().fg(fade(Midnight::GREY1, p)),
                ),
            ]));
            for row in clamp(wrap(post.title, text_width), TITLE_ROWS) {
                lines.push(Line::from(vec![
                    pad.clone(),
                    Span::styled(
                        row,
                        Style::default().fg(fade(Midnight::FG0, p)).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            for row in clamp(wrap(post.excerpt, text_width), EXCERPT_ROWS) {
                lines.push(Line::from(vec![
                    pad.clone(),
                    Span::styled(row, Style::default().fg(fade(Midnight::FG1, p))),
                ]));
            }
            lines.push(Line::from(vec![
                pad,
                Span::styled("Read More →", Style::default().fg(fade(Midnight::BLUE, p))),
            ]));
            lines.push(blank());
        }
        lines
    }
}

/// Keep at most `max` rows, marking the cut with an ellipsis
fn clamp(mut rows: Vec<String>, max: usize) -> Vec<String> {
    if rows.len() > max {
        rows.truncate(max);
        if let Some(last) = rows.last_mut() {
            last.push('…');
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_marks_cut() {
        let rows = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(clamp(rows.clone(), 3), rows);
        assert_eq!(clamp(rows, 2), vec!["one".to_string(), "two…".to_string()]);
    }
}
