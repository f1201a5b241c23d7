use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, TIMELINE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

pub struct TimelineSection;

impl TimelineSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Experience, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Professional", "Journey", Midnight::BLUE, title, width));

        // entries alternate either side of a center rule
        let half = inner / 2;
        let card_width = half.saturating_sub(3).max(12);
        for (i, entry) in TIMELINE.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Experience, card_stagger(i));
            let tone = accent(entry.accent);
            let left_side = i % 2 == 0;

            let mut card = vec![
                Span::styled(
                    entry.period.to_string(),
                    Style::default().fg(fade(tone, p)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    entry.title.to_string(),
                    Style::default().fg(fade(Midnight::FG0, p)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    entry.company.to_string(),
                    Style::default().fg(fade(Midnight::GREY2, p)),
                ),
            ];
            card.extend(
                wrap(entry.description, card_width)
                    .into_iter()
                    .map(|row| Span::styled(row, Style::default().fg(fade(Midnight::FG1, p)))),
            );

            for span in card {
                let rule = Span::styled("│", Style::default().fg(fade(tone, p)));
                let line = if left_side {
                    let pad = half.saturating_sub(span.width() + 2);
                    Line::from(vec![
                        Span::raw(" ".repeat(indent + pad)),
                        span,
                        Span::raw("  "),
                        rule,
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(" ".repeat(indent + half)),
                        rule,
                        Span::raw("  "),
                        span,
                    ])
                };
                lines.push(line);
            }
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent + half)),
                Span::styled("●", Style::default().fg(fade(tone, p))),
            ]));
        }
        lines.push(blank());
        lines
    }
}
