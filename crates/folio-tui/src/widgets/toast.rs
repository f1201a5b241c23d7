use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::notification::NotificationKind;
use crate::theme::Midnight;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastWidget;

impl ToastWidget {
    /// Stack visible notifications down the top-right corner, newest first
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut y = area.y;

        for notification in app.notifications.visible() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            let color = match notification.kind {
                NotificationKind::Success => Midnight::SUCCESS,
                NotificationKind::Error => Midnight::ERROR,
            };

            frame.render_widget(Clear, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Midnight::BG1));
            let text = vec![
                Line::from(Span::styled(
                    notification.title.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    notification.description.clone(),
                    Style::default().fg(Midnight::FG1),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
                rect,
            );
            y += TOAST_HEIGHT;
        }
    }
}
