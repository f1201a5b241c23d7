use std::time::Duration;

use folio_core::content::PROFILE;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::{blank, center_pad, column, wrap};
use crate::app::App;
use crate::motion::{Reveal, TypedLine};
use crate::theme::{fade, Midnight};

/// Tagline and actions appear once the greeting has had time to type out
const TAGLINE_DELAY: Duration = Duration::from_millis(8000);
const ACTIONS_DELAY: Duration = Duration::from_millis(8500);
const FADE_IN: Duration = Duration::from_millis(800);
const CURSOR_BLINK: Duration = Duration::from_millis(530);

pub struct HeroSection;

impl HeroSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (_, inner) = column(width);
        let mut content: Vec<Line<'static>> = Vec::new();

        let cursor_on = (app.clock.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0;
        let typed_style = Style::default().fg(Midnight::FG0).add_modifier(Modifier::BOLD);
        for line in app.typer.rendered() {
            match line {
                TypedLine::Complete(text) => {
                    content.push(Line::from(vec![
                        Span::raw(center_pad(text, width as usize)),
                        Span::styled(text.to_string(), typed_style),
                    ]));
                }
                TypedLine::Active(text) => {
                    let cursor = if cursor_on { "▌" } else { " " };
                    // center as if the cursor were part of the text
                    let pad = " ".repeat((width as usize).saturating_sub(text.width() + 1) / 2);
                    content.push(Line::from(vec![
                        Span::raw(pad),
                        Span::styled(text.to_string(), typed_style),
                        Span::styled(cursor, Style::default().fg(Midnight::BLUE)),
                    ]));
                }
                TypedLine::Pending => content.push(blank()),
            }
            content.push(blank());
        }

        let since_open = Some(app.clock);
        let tagline = Reveal::new(FADE_IN).delayed(TAGLINE_DELAY).progress(since_open);
        for row in wrap(PROFILE.tagline, inner.min(72)) {
            content.push(Line::from(vec![
                Span::raw(center_pad(&row, width as usize)),
                Span::styled(row, Style::default().fg(fade(Midnight::FG1, tagline))),
            ]));
        }
        content.push(blank());

        let actions = Reveal::new(FADE_IN).delayed(ACTIONS_DELAY).progress(since_open);
        let download = " [d] Download Resume ";
        let contact = " [c] Get In Touch ";
        let pad = center_pad(&format!("{}    {}", download, contact), width as usize);
        content.push(Line::from(vec![
            Span::raw(pad),
            Span::styled(
                download,
                Style::default()
                    .fg(fade(Midnight::FG0, actions))
                    .bg(fade(Midnight::BLUE, actions))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                contact,
                Style::default()
                    .fg(fade(Midnight::PINK, actions))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        // fills at least one screen, content vertically centered
        let total = content.len().max(app.viewport.1 as usize);
        let top = (total - content.len()) / 2;
        let mut lines = vec![blank(); top];
        lines.extend(content);
        lines.resize(total, blank());
        lines
    }
}
