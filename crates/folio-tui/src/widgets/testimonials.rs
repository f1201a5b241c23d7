use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, TESTIMONIALS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

const MAX_STARS: u8 = 5;

pub struct TestimonialsSection;

impl TestimonialsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Testimonials, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Client", "Testimonials", Midnight::PURPLE, title, width));

        let pad = " ".repeat(indent + 2);
        for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Testimonials, card_stagger(i));
            let tone = accent(testimonial.accent);
            let rating = testimonial.rating.min(MAX_STARS) as usize;

            lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled("★".repeat(rating), Style::default().fg(fade(Midnight::YELLOW, p))),
                Span::styled(
                    "☆".repeat(MAX_STARS as usize - rating),
                    Style::default().fg(fade(Midnight::GREY0, p)),
                ),
            ]));
            for row in wrap(&format!("\"{}\"", testimonial.message), inner.saturating_sub(4)) {
                lines.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled(
                        row,
                        Style::default()
                            .fg(fade(Midnight::FG1, p))
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }
            lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(
                    testimonial.name.to_string(),
                    Style::default().fg(fade(tone, p)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(", {} at {}", testimonial.role, testimonial.company),
                    Style::default().fg(fade(Midnight::GREY2, p)),
                ),
            ]));
            lines.push(blank());
        }
        lines
    }
}
