mod about;
mod achievements;
mod background;
mod blog;
mod contact;
mod footer;
mod help;
mod hero;
mod nav;
mod page;
mod projects;
mod services;
mod skills;
mod tech_stack;
mod testimonials;
pub(crate) mod text;
mod timeline;
mod toast;

use std::time::Duration;

use folio_core::content::SectionId;

use crate::app::App;
use crate::motion::{MotionConfigExt, Reveal};

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use background::{FloatingAccents, MoteLayer, OrbLayer, ShapeLayer};
pub use blog::BlogSection;
pub use contact::ContactSection;
pub use footer::FooterSection;
pub use help::HelpWidget;
pub use hero::HeroSection;
pub use nav::NavWidget;
pub use page::PageWidget;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use skills::SkillsSection;
pub use tech_stack::TechStackSection;
pub use testimonials::TestimonialsSection;
pub use timeline::TimelineSection;
pub use toast::ToastWidget;

/// Entrance progress of an element in `section`, `delay` after it came into view
pub(crate) fn reveal_progress(app: &App, section: SectionId, delay: Duration) -> f64 {
    let reveal = Reveal::new(app.config.ui.motion.reveal_duration()).delayed(delay);
    reveal_progress_for(app, section, reveal)
}

pub(crate) fn reveal_progress_for(app: &App, section: SectionId, reveal: Reveal) -> f64 {
    reveal.progress(app.since_visible(section))
}
