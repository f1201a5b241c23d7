use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, SERVICES};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

pub struct ServicesSection;

impl ServicesSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Services, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("What I", "Offer", Midnight::PURPLE, title, width));

        let text_width = inner.saturating_sub(4);
        for (i, service) in SERVICES.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Services, card_stagger(i));
            let tone = accent(service.accent);
            let pad = Span::raw(" ".repeat(indent + 2));

            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled("◆ ", Style::default().fg(fade(tone, p))),
                Span::styled(
                    service.title.to_string(),
                    Style::default().fg(fade(Midnight::FG0, p)).add_modifier(Modifier::BOLD),
                ),
            ]));
            for row in wrap(service.description, text_width) {
                lines.push(Line::from(vec![
                    pad.clone(),
                    Span::styled(row, Style::default().fg(fade(Midnight::FG1, p))),
                ]));
            }
            for feature in service.features {
                lines.push(Line::from(vec![
                    pad.clone(),
                    Span::styled("• ", Style::default().fg(fade(tone, p))),
                    Span::styled(feature.to_string(), Style::default().fg(fade(Midnight::GREY2, p))),
                ]));
            }
            lines.push(Line::from(vec![
                pad,
                Span::styled(
                    "Learn More →",
                    Style::default().fg(fade(tone, p)).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(blank());
        }
        lines
    }
}
