use std::time::Duration;

use folio_core::content::{SectionId, ABOUT_PARAGRAPHS, ABOUT_STATS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, body, center_pad, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

pub struct AboutSection;

impl AboutSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::About, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("About", "Me", Midnight::BLUE, title, width));

        for paragraph in ABOUT_PARAGRAPHS {
            for row in wrap(paragraph, inner) {
                lines.push(body(indent, row, fade(Midnight::FG1, title)));
            }
            lines.push(blank());
        }

        let stats = reveal_progress(app, SectionId::About, Duration::from_millis(200));
        let mut spans = Vec::new();
        let text: String = ABOUT_STATS
            .iter()
            .map(|(number, label, _)| format!("{}  {}", number, label))
            .collect::<Vec<_>>()
            .join("        ");
        spans.push(Span::raw(center_pad(&text, width as usize)));
        for (i, (number, label, tone)) in ABOUT_STATS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("        "));
            }
            spans.push(Span::styled(
                number.to_string(),
                Style::default()
                    .fg(fade(accent(*tone), stats))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("  {}", label),
                Style::default().fg(fade(Midnight::GREY2, stats)),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(blank());
        lines
    }
}
