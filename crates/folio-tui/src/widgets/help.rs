use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Midnight;

const BINDINGS: [(&str, &str); 15] = [
    ("j / k", "scroll down / up"),
    ("Ctrl-d / Ctrl-u", "half page down / up"),
    ("Ctrl-f / Ctrl-b", "page down / up"),
    ("g / G", "top / bottom"),
    ("1-5", "jump to a section"),
    ("n / p", "next / previous section"),
    ("d", "download resume"),
    ("c", "write a message"),
    ("e", "email me"),
    ("Tab / S-Tab", "next / previous field"),
    ("Enter", "next field, send from message"),
    ("Ctrl-s", "send message"),
    ("Ctrl-l", "clear the form"),
    ("Esc", "leave the form"),
    ("q", "quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame) {
        let area = frame.area();
        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Midnight::ACCENT))
            .style(Style::default().bg(Midnight::BG1));

        let mut lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<16}", keys),
                        Style::default().fg(Midnight::YELLOW).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*action, Style::default().fg(Midnight::FG1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(Midnight::GREY1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
