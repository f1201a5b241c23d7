use std::sync::Arc;
use std::time::Duration;

use folio_core::content::{SectionId, HERO_LINES, NAV_ITEMS};
use folio_core::AppConfig;

use crate::contact_form::ContactForm;
use crate::motion::particles::cell_to_px;
use crate::motion::{
    Floaters, MoteField, MotionConfigExt, ParticleField, ScrollAnimator, ScrollProgress, SignalHub, Span, Typewriter,
    UiSignal, VisibilityTracker,
};
use crate::notification::{Notification, Notifications};

/// Rows above the page taken by the navigation bar and progress bar
pub const NAV_HEIGHT: u16 = 2;

/// Rows below a section's top at which it counts as the current one
const ACTIVE_SECTION_THRESHOLD: u16 = 3;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the page
    Browse,
    /// Typing into the contact form
    EditContact,
    /// Help overlay
    Help,
}

/// Where each section landed on the last draw, in page rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    sections: Vec<(SectionId, Span)>,
    height: u16,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section below the previous one
    pub fn push(&mut self, id: SectionId, rows: u16) {
        let span = Span::new(self.height as i32, rows as i32);
        self.sections.push((id, span));
        self.height = self.height.saturating_add(rows);
    }

    pub fn span(&self, id: SectionId) -> Option<Span> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, span)| *span)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub mode: Mode,
    pub should_quit: bool,
    /// Time since the page opened, advanced by `on_frame`
    pub clock: Duration,
    pub hub: SignalHub,
    pub scroll: ScrollAnimator,
    pub progress: ScrollProgress,
    pub visibility: VisibilityTracker<SectionId>,
    pub typer: Typewriter,
    pub particles: ParticleField,
    pub motes: MoteField,
    pub floaters: Floaters,
    pub contact: ContactForm,
    pub notifications: Notifications,
    pub layout: PageLayout,
    /// Page viewport (columns, rows), excluding the navigation bar
    pub viewport: (u16, u16),
    pub active_section: SectionId,
    /// A resume download is in flight
    pub downloading: bool,
    published_scroll: Option<u16>,
}

impl App {
    /// Create the page for a terminal of `columns` x `rows`
    pub fn new(config: Arc<AppConfig>, columns: u16, rows: u16) -> Self {
        let motion = &config.ui.motion;
        let viewport = page_viewport(columns, rows);

        let hub = SignalHub::new();
        let mut progress = ScrollProgress::new();
        progress.attach(&hub);
        let mut visibility = VisibilityTracker::new(SectionId::ALL, motion.visibility_margin_rows);
        visibility.attach(&hub);
        let mut particles = ParticleField::from_motion(motion, viewport.0, viewport.1);
        particles.attach(&hub);
        let mut motes = MoteField::from_motion(motion, viewport.0, viewport.1);
        motes.attach(&hub);
        let floaters = Floaters::from_motion(motion);

        let typer = Typewriter::new(HERO_LINES, motion.typer_speed(), motion.typer_hold());
        let contact = ContactForm::new(motion.contact_reset());
        let notifications = Notifications::new(motion.notification_lifetime());
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());

        let app = Self {
            config,
            mode: Mode::Browse,
            should_quit: false,
            clock: Duration::ZERO,
            hub,
            scroll,
            progress,
            visibility,
            typer,
            particles,
            motes,
            floaters,
            contact,
            notifications,
            layout: PageLayout::new(),
            viewport,
            active_section: SectionId::Home,
            downloading: false,
            published_scroll: None,
        };
        app.hub.publish(UiSignal::Resize {
            width: columns,
            height: viewport.1,
        });
        app
    }

    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        self.viewport = page_viewport(columns, rows);
        self.hub.publish(UiSignal::Resize {
            width: columns,
            height: self.viewport.1,
        });
    }

    /// Pointer moved to a terminal cell; the field lives in page coordinates
    pub fn on_pointer(&mut self, column: u16, row: u16) {
        let p = cell_to_px(column, row.saturating_sub(NAV_HEIGHT));
        self.hub.publish(UiSignal::Pointer { x: p.x, y: p.y });
    }

    /// Record where sections landed on this draw
    pub fn set_layout(&mut self, layout: PageLayout) {
        if layout != self.layout {
            self.progress.set_document_height(layout.height());
            self.visibility.invalidate();
            self.layout = layout;
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height().saturating_sub(self.viewport.1)
    }

    #[inline]
    pub fn page_scroll(&self) -> u16 {
        self.scroll.current_scroll()
    }

    /// Advance every primitive by `dt`: apply queued signals, then timers
    pub fn on_frame(&mut self, dt: Duration) {
        self.clock += dt;

        let offset = self.scroll.update(dt, self.max_scroll());
        if self.published_scroll != Some(offset) {
            self.published_scroll = Some(offset);
            self.hub.publish(UiSignal::Scroll { offset });
        }

        self.progress.on_frame();
        let layout = &self.layout;
        for section in self.visibility.on_frame(self.clock, |id| layout.span(id)) {
            tracing::debug!(?section, "section entered view");
        }
        self.typer.advance(dt);
        self.particles.advance(dt);
        self.motes.advance(dt);
        self.contact.advance(dt);
        self.notifications.advance(dt);
        self.update_active_section();
    }

    /// Keep the loop at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.needs_update() || !self.typer.is_finished() || !self.particles.is_empty()
            || !self.motes.is_empty()
            || !self.floaters.is_empty()
    }

    /// Time since `section` first entered the viewport
    pub fn since_visible(&self, section: SectionId) -> Option<Duration> {
        self.visibility.since_entered(section, self.clock)
    }

    pub fn scroll_to_section(&mut self, section: SectionId) {
        if let Some(span) = self.layout.span(section) {
            let top = span.top.max(0) as u16;
            self.scroll.scroll_to(top, self.max_scroll());
        }
    }

    /// Jump to the section after (or before) the one at the top of the page
    pub fn step_section(&mut self, forward: bool) {
        let row = self.scroll.target_scroll() as i32;
        let target = if forward {
            SectionId::ALL
                .into_iter()
                .find(|id| self.layout.span(*id).is_some_and(|s| s.top > row))
        } else {
            SectionId::ALL
                .into_iter()
                .rev()
                .find(|id| self.layout.span(*id).is_some_and(|s| s.top < row))
        };
        if let Some(section) = target {
            self.scroll_to_section(section);
        }
    }

    /// The navigation entry whose section covers the threshold row. Holds the
    /// previous value when none does.
    fn update_active_section(&mut self) {
        let row = self.page_scroll().saturating_add(ACTIVE_SECTION_THRESHOLD) as i32;
        let current = NAV_ITEMS.iter().find(|item| {
            self.layout
                .span(item.section)
                .is_some_and(|s| s.contains(row))
        });
        if let Some(item) = current {
            self.active_section = item.section;
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn enter_contact_mode(&mut self) {
        self.mode = Mode::EditContact;
        self.scroll_to_section(SectionId::Contact);
    }
}

/// Page area for a terminal size
pub fn page_viewport(columns: u16, rows: u16) -> (u16, u16) {
    (columns, rows.saturating_sub(NAV_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.motion.seed = Some(11);
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(Arc::new(config), 80, 22);

        let mut layout = PageLayout::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            layout.push(id, if i == 0 { 20 } else { 30 });
        }
        app.set_layout(layout);
        app
    }

    #[test]
    fn test_layout_spans_stack() {
        let app = app();
        assert_eq!(app.layout.span(SectionId::Home), Some(Span::new(0, 20)));
        assert_eq!(app.layout.span(SectionId::About), Some(Span::new(20, 30)));
        assert_eq!(app.layout.height(), 20 + 11 * 30);
        assert_eq!(app.max_scroll(), app.layout.height() - 20);
    }

    #[test]
    fn test_first_frame_reveals_home_only() {
        let mut app = app();
        app.on_frame(FRAME);
        assert!(app.visibility.is_visible(SectionId::Home));
        assert!(!app.visibility.is_visible(SectionId::Projects));
        assert_eq!(app.progress.ratio(), 0.0);
    }

    #[test]
    fn test_scrolling_updates_visibility_progress_and_nav() {
        let mut app = app();
        app.on_frame(FRAME);

        app.scroll_to_section(SectionId::Projects);
        app.on_frame(FRAME);
        assert!(app.visibility.is_visible(SectionId::Projects));
        assert!(app.progress.ratio() > 0.0);
        assert_eq!(app.active_section, SectionId::Projects);

        // testimonials is not a nav entry; the active entry holds
        app.scroll_to_section(SectionId::Testimonials);
        app.on_frame(FRAME);
        assert_eq!(app.active_section, SectionId::Projects);

        app.scroll.scroll_to(0, app.max_scroll());
        app.on_frame(FRAME);
        assert_eq!(app.active_section, SectionId::Home);
        assert!(app.visibility.is_visible(SectionId::Projects));
    }

    #[test]
    fn test_step_section() {
        let mut app = app();
        app.step_section(true);
        app.on_frame(FRAME);
        assert_eq!(app.page_scroll(), 20);
        app.step_section(false);
        app.on_frame(FRAME);
        assert_eq!(app.page_scroll(), 0);
    }

    #[test]
    fn test_resize_changes_viewport() {
        let mut app = app();
        app.on_resize(100, 42);
        app.on_frame(FRAME);
        assert_eq!(app.viewport, (100, 40));
        assert_eq!(app.max_scroll(), app.layout.height() - 40);
        assert_eq!(app.motes.size_px(), app.particles.size_px());
    }

    #[test]
    fn test_background_layers_start_from_config() {
        let app = app();
        assert_eq!(app.motes.len(), app.config.ui.motion.mote_count);
        assert_eq!(app.floaters.len(), 6);
        assert!(app.needs_fast_update());
    }
}
