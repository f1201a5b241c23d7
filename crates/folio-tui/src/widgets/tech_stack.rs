use std::time::Duration;

use folio_core::content::{tech_by_category, tech_stagger, SectionId};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::text::{bar, blank, column, heading};
use super::{reveal_progress, reveal_progress_for};
use crate::app::App;
use crate::motion::{EasingType, Reveal};
use crate::theme::{accent, fade, Midnight};

const BAR_GROWTH: Duration = Duration::from_millis(1500);
const NAME_WIDTH: usize = 14;

pub struct TechStackSection;

impl TechStackSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::TechStack, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Tech", "Stack", Midnight::GREEN, title, width));

        let bar_width = inner.saturating_sub(NAME_WIDTH + 8).max(4);
        for (c, (category, techs)) in tech_by_category().into_iter().enumerate() {
            let tone = accent(category.accent());
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    category.label().to_uppercase(),
                    Style::default().fg(fade(tone, title)).add_modifier(Modifier::BOLD),
                ),
            ]));
            for (i, tech) in techs.iter().enumerate() {
                let growth = Reveal::new(BAR_GROWTH)
                    .delayed(tech_stagger(c, i))
                    .with_easing(EasingType::EaseOut);
                let p = reveal_progress_for(app, SectionId::TechStack, growth);
                let (filled, empty) = bar(bar_width, tech.level as f64 / 100.0 * p);
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent + 2)),
                    Span::styled(
                        format!("{:<width$}", tech.name, width = NAME_WIDTH),
                        Style::default().fg(fade(Midnight::FG1, p.max(title * 0.5))),
                    ),
                    Span::styled(filled, Style::default().fg(tone)),
                    Span::styled(empty, Style::default().fg(Midnight::BG2)),
                    Span::styled(format!(" {:>3}%", tech.level), Style::default().fg(fade(Midnight::GREY2, p))),
                ]));
            }
            lines.push(blank());
        }
        lines
    }
}
