use folio_core::content::{NAV_ITEMS, PROFILE};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::text::bar;
use crate::app::App;
use crate::theme::Midnight;

pub struct NavWidget;

impl NavWidget {
    /// Monogram and section entries on the first row, scroll progress under them
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }

        let bg = Style::default().bg(Midnight::BG1);
        let monogram = format!(" {} ", PROFILE.monogram);
        let mut items: Vec<Span> = Vec::new();
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let active = item.section == app.active_section;
            let style = if active {
                bg.fg(Midnight::BLUE).add_modifier(Modifier::BOLD)
            } else {
                bg.fg(Midnight::GREY2)
            };
            items.push(Span::styled(format!(" {} ", i + 1), bg.fg(Midnight::GREY0)));
            items.push(Span::styled(item.label, style));
            items.push(Span::styled(" ", bg));
        }
        let items_width: usize = items.iter().map(|s| s.content.width()).sum();
        let gap = (area.width as usize).saturating_sub(monogram.width() + items_width);

        let mut row = vec![
            Span::styled(
                monogram,
                bg.fg(Midnight::PINK).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(gap), bg),
        ];
        row.extend(items);

        let mut lines = vec![Line::from(row)];
        if area.height > 1 {
            let (filled, empty) = bar(area.width as usize, app.progress.ratio());
            let filled = filled.replace('█', "▀");
            let empty = " ".repeat(empty.chars().count());
            lines.push(Line::from(vec![
                Span::styled(filled, Style::default().fg(Midnight::PURPLE)),
                Span::raw(empty),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}
