use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, ACHIEVEMENTS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

const NUMBER_WIDTH: usize = 8;

pub struct AchievementsSection;

impl AchievementsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Achievements, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Key", "Achievements", Midnight::BLUE, title, width));

        let text_width = inner.saturating_sub(NUMBER_WIDTH + 2);
        for (i, achievement) in ACHIEVEMENTS.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Achievements, card_stagger(i));
            let tone = accent(achievement.accent);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    format!("{:>width$}  ", achievement.number, width = NUMBER_WIDTH),
                    Style::default().fg(fade(tone, p)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    achievement.label.to_string(),
                    Style::default().fg(fade(Midnight::FG0, p)).add_modifier(Modifier::BOLD),
                ),
            ]));
            for row in wrap(achievement.description, text_width) {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent + NUMBER_WIDTH + 2)),
                    Span::styled(row, Style::default().fg(fade(Midnight::GREY2, p))),
                ]));
            }
            lines.push(blank());
        }
        lines
    }
}
