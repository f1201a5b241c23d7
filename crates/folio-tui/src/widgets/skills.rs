use std::time::Duration;

use folio_core::content::{skill_stagger, SectionId, SKILLS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{reveal_progress, reveal_progress_for};
use super::text::{bar, blank, column, heading};
use crate::app::App;
use crate::motion::{EasingType, Reveal};
use crate::theme::{accent, fade, Midnight};

const BAR_GROWTH: Duration = Duration::from_secs(1);
const NAME_WIDTH: usize = 16;

pub struct SkillsSection;

impl SkillsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Skills, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Skills &", "Technologies", Midnight::PINK, title, width));

        // name, bar, percentage
        let bar_width = inner.saturating_sub(NAME_WIDTH + 6).max(4);
        for (c, category) in SKILLS.iter().enumerate() {
            let tone = accent(category.accent);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    category.title.to_string(),
                    Style::default().fg(fade(tone, title)).add_modifier(Modifier::BOLD),
                ),
            ]));
            for (s, skill) in category.skills.iter().enumerate() {
                let growth = Reveal::new(BAR_GROWTH)
                    .delayed(skill_stagger(c, s))
                    .with_easing(EasingType::EaseOut);
                let p = reveal_progress_for(app, SectionId::Skills, growth);
                let fraction = skill.level as f64 / 100.0 * p;
                let (filled, empty) = bar(bar_width, fraction);
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent + 2)),
                    Span::styled(
                        format!("{:<width$}", skill.name, width = NAME_WIDTH),
                        Style::default().fg(fade(Midnight::FG1, title)),
                    ),
                    Span::styled(filled, Style::default().fg(tone)),
                    Span::styled(empty, Style::default().fg(Midnight::BG3)),
                    Span::styled(
                        format!(" {:>3}%", (skill.level as f64 * p).round() as u8),
                        Style::default().fg(Midnight::GREY2),
                    ),
                ]));
            }
            lines.push(blank());
        }
        lines
    }
}
