use folio_core::content::PROFILE;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::text::{blank, center_pad};
use crate::theme::Midnight;

pub struct FooterSection;

impl FooterSection {
    pub fn lines(width: u16) -> Vec<Line<'static>> {
        let rule = "─".repeat(width as usize);
        let hints = "q quit · ? help · d resume · e email";
        vec![
            Line::from(Span::styled(rule, Style::default().fg(Midnight::BG3))),
            blank(),
            Line::from(vec![
                Span::raw(center_pad(PROFILE.name, width as usize)),
                Span::styled(
                    PROFILE.name,
                    Style::default().fg(Midnight::FG0).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(center_pad(PROFILE.copyright, width as usize)),
                Span::styled(PROFILE.copyright, Style::default().fg(Midnight::GREY1)),
            ]),
            Line::from(vec![
                Span::raw(center_pad(hints, width as usize)),
                Span::styled(hints, Style::default().fg(Midnight::GREY0)),
            ]),
            blank(),
        ]
    }
}
