use folio_core::content::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{
    AboutSection, AchievementsSection, BlogSection, ContactSection, FloatingAccents,
    FooterSection, HelpWidget, HeroSection, MoteLayer, NavWidget, OrbLayer, ProjectsSection,
    ServicesSection, ShapeLayer, SkillsSection, TechStackSection, TestimonialsSection,
    TimelineSection, ToastWidget,
};
use crate::app::{App, Mode, PageLayout, NAV_HEIGHT};
use crate::theme::Midnight;

pub struct PageWidget;

impl PageWidget {
    /// Draw the whole screen and record where each section landed
    pub fn render(frame: &mut Frame, app: &mut App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(NAV_HEIGHT), Constraint::Min(0)])
            .split(frame.area());
        let (nav_area, page_area) = (chunks[0], chunks[1]);

        let (lines, layout) = Self::build(app, page_area.width);
        app.set_layout(layout);

        Self::render_page(frame, page_area, app, lines);
        NavWidget::render(frame, nav_area, app);
        ToastWidget::render(frame, page_area, app);
        if app.mode == Mode::Help {
            HelpWidget::render(frame);
        }
    }

    /// Every section's lines, top to bottom, and the rows each one covers
    pub fn build(app: &App, width: u16) -> (Vec<Line<'static>>, PageLayout) {
        let mut lines = Vec::new();
        let mut layout = PageLayout::new();
        for id in SectionId::ALL {
            let section = match id {
                SectionId::Home => HeroSection::lines(app, width),
                SectionId::About => AboutSection::lines(app, width),
                SectionId::Services => ServicesSection::lines(app, width),
                SectionId::Achievements => AchievementsSection::lines(app, width),
                SectionId::Skills => SkillsSection::lines(app, width),
                SectionId::Experience => TimelineSection::lines(app, width),
                SectionId::Projects => ProjectsSection::lines(app, width),
                SectionId::Testimonials => TestimonialsSection::lines(app, width),
                SectionId::TechStack => TechStackSection::lines(app, width),
                SectionId::Blog => BlogSection::lines(app, width),
                SectionId::Contact => ContactSection::lines(app, width),
                SectionId::Footer => FooterSection::lines(width),
            };
            layout.push(id, u16::try_from(section.len()).unwrap_or(u16::MAX));
            lines.extend(section);
        }
        (lines, layout)
    }

    fn render_page(frame: &mut Frame, area: Rect, app: &App, lines: Vec<Line<'static>>) {
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(Midnight::BG0))
            .scroll((app.page_scroll(), 0));
        frame.render_widget(paragraph, area);
        frame.render_widget(OrbLayer::new(app), area);
        frame.render_widget(ShapeLayer::new(app), area);
        frame.render_widget(MoteLayer::new(app), area);
        if let Some(accents) = FloatingAccents::new(app) {
            frame.render_widget(accents, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use folio_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.motion.seed = Some(5);
        App::new(Arc::new(config), 80, 24)
    }

    #[test]
    fn test_layout_covers_every_section_in_order() {
        let app = app();
        let (lines, layout) = PageWidget::build(&app, 80);
        assert_eq!(layout.height() as usize, lines.len());

        let mut top = 0;
        for id in SectionId::ALL {
            let span = layout.span(id).unwrap();
            assert_eq!(span.top, top);
            assert!(span.height > 0);
            top = span.bottom();
        }
        // hero fills at least one screen
        assert!(layout.span(SectionId::Home).unwrap().height >= app.viewport.1 as i32);
    }

    #[test]
    fn test_section_heights_do_not_change_while_animating() {
        let mut app = app();
        let (_, before) = PageWidget::build(&app, 80);
        app.set_layout(before.clone());
        for _ in 0..200 {
            app.on_frame(Duration::from_millis(50));
        }
        let bottom = app.max_scroll();
        app.scroll.scroll_to(bottom, bottom);
        for _ in 0..100 {
            app.on_frame(Duration::from_millis(50));
        }
        let (_, after) = PageWidget::build(&app, 80);
        assert_eq!(before, after);
    }

    #[test]
    fn test_render_records_layout() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| PageWidget::render(frame, &mut app)).unwrap();
        assert!(!app.layout.is_empty());
        assert!(app.max_scroll() > 0);
    }

    #[test]
    fn test_services_and_articles_render_once_scrolled_to() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| PageWidget::render(frame, &mut app)).unwrap();

        for (section, needle) in [
            (SectionId::Services, "Full-Stack Development"),
            (SectionId::Blog, "Read More"),
        ] {
            app.scroll_to_section(section);
            for _ in 0..100 {
                app.on_frame(Duration::from_millis(50));
            }
            terminal.draw(|frame| PageWidget::render(frame, &mut app)).unwrap();
            let screen: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(screen.contains(needle), "{needle} missing after scrolling to {section:?}");
        }
    }

    #[test]
    fn test_motes_appear_once_climbing() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        for _ in 0..500 {
            app.on_frame(Duration::from_millis(50));
        }
        terminal.draw(|frame| PageWidget::render(frame, &mut app)).unwrap();
        let visible = app.motes.samples().filter(|s| s.opacity > 0.0).count();
        let dots = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "·")
            .count();
        assert!(visible > 0);
        assert!(dots > 0);
    }
}
