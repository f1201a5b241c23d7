use std::time::Duration;

use folio_core::content::{card_stagger, SectionId, PROJECTS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_progress;
use super::text::{blank, column, heading, wrap};
use crate::app::App;
use crate::theme::{accent, fade, Midnight};

pub struct ProjectsSection;

impl ProjectsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Projects, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Featured", "Projects", Midnight::PINK, title, width));

        let text_width = inner.saturating_sub(4);
        for (i, project) in PROJECTS.iter().enumerate() {
            let p = reveal_progress(app, SectionId::Projects, card_stagger(i));
            let tone = accent(project.accent);
            let edge = Span::styled("┃ ", Style::default().fg(fade(tone, p)));

            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                edge.clone(),
                Span::styled(
                    project.title.to_string(),
                    Style::default().fg(fade(Midnight::FG0, p)).add_modifier(Modifier::BOLD),
                ),
            ]));
            for row in wrap(project.description, text_width) {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    edge.clone(),
                    Span::styled(row, Style::default().fg(fade(Midnight::FG1, p))),
                ]));
            }

            let mut tags = vec![Span::raw(" ".repeat(indent)), edge.clone()];
            for tech in project.technologies {
                tags.push(Span::styled(
                    format!(" {} ", tech),
                    Style::default()
                        .fg(fade(tone, p))
                        .bg(fade(Midnight::BG2, p)),
                ));
                tags.push(Span::raw(" "));
            }
            lines.push(Line::from(tags));

            let links: Vec<&str> = [
                project.github_url.map(|_| "GitHub"),
                project.live_url.map(|_| "Live Demo"),
            ]
            .into_iter()
            .flatten()
            .collect();
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                edge,
                Span::styled(links.join("  ·  "), Style::default().fg(fade(Midnight::GREY2, p))),
            ]));
            lines.push(blank());
        }
        lines
    }
}
