//! Static page content
//!
//! Everything the section widgets render comes from these tables.

use std::time::Duration;

use serde::Serialize;

/// Accent color family used across sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Pink,
    Purple,
    Green,
}

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Services,
    Achievements,
    Skills,
    Experience,
    Projects,
    Testimonials,
    TechStack,
    Blog,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 12] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Achievements,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::TechStack,
        SectionId::Blog,
        SectionId::Contact,
        SectionId::Footer,
    ];
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub monogram: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub message: &'static str,
    pub rating: u8,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl TechCategory {
    pub fn accent(self) -> Accent {
        match self {
            TechCategory::Frontend => Accent::Blue,
            TechCategory::Backend => Accent::Pink,
            TechCategory::Database => Accent::Purple,
            TechCategory::Tools => Accent::Green,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Database => "database",
            TechCategory::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Technology {
    pub name: &'static str,
    pub category: TechCategory,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    monogram: "<AM/>",
    role: "Full Stack Developer",
    tagline: "Crafting digital experiences with modern web technologies. \
              Passionate about creating scalable, user-friendly applications that make a difference.",
    email: "alex.morgan@email.com",
    copyright: "© 2024 Alex Morgan. Built with passion and lots of coffee ☕",
};

pub const HERO_LINES: [&str; 3] = [
    "Hi",
    "Hi, I'm Alex Morgan",
    "I am a Full Stack Developer",
];

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { section: SectionId::Home, label: "Home" },
    NavItem { section: SectionId::About, label: "About" },
    NavItem { section: SectionId::Experience, label: "Experience" },
    NavItem { section: SectionId::Projects, label: "Projects" },
    NavItem { section: SectionId::Contact, label: "Contact" },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate full-stack developer with over 5 years of experience building \
     web applications that solve real-world problems. My journey started with curiosity \
     about how websites work, and it evolved into a deep love for creating digital experiences \
     that users genuinely enjoy.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to \
     open-source projects, or sharing knowledge through technical blog posts. I believe \
     in continuous learning and staying at the forefront of web development trends.",
];

pub const ABOUT_STATS: [(&str, &str, Accent); 2] = [
    ("50+", "Projects Completed", Accent::Blue),
    ("5+", "Years Experience", Accent::Pink),
];

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        title: "Senior Full Stack Developer",
        company: "TechCorp Solutions",
        period: "2022 - Present",
        description: "Leading development of enterprise web applications using React, Node.js, and AWS. \
                      Mentoring junior developers and implementing best practices.",
        accent: Accent::Blue,
    },
    TimelineEntry {
        title: "Full Stack Developer",
        company: "StartupXYZ",
        period: "2020 - 2022",
        description: "Built scalable web applications from scratch. Worked with React, Python Django, \
                      and PostgreSQL. Increased application performance by 40%.",
        accent: Accent::Pink,
    },
    TimelineEntry {
        title: "Frontend Developer",
        company: "DigitalAgency",
        period: "2019 - 2020",
        description: "Developed responsive websites and web applications for various clients. \
                      Specialized in React.js and modern CSS frameworks.",
        accent: Accent::Purple,
    },
];

pub const SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        accent: Accent::Blue,
        skills: &[
            Skill { name: "React.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Next.js", level: 88 },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        accent: Accent::Pink,
        skills: &[Skill { name: "Node.js", level: 92 }],
    },
    SkillCategory {
        title: "Tools & Others",
        accent: Accent::Purple,
        skills: &[Skill { name: "Git", level: 95 }],
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and Stripe integration. \
                      Features real-time inventory management and analytics dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        github_url: Some("#"),
        live_url: Some("#"),
        accent: Accent::Blue,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management tool with real-time updates, drag-and-drop \
                      functionality, and team collaboration features.",
        technologies: &["Vue.js", "Express", "Socket.io", "PostgreSQL"],
        github_url: Some("#"),
        live_url: Some("#"),
        accent: Accent::Pink,
    },
    Project {
        title: "Weather Analytics",
        description: "Advanced weather tracking application with interactive maps, historical data \
                      analysis, and predictive modeling using machine learning.",
        technologies: &["Python", "Django", "D3.js", "TensorFlow"],
        github_url: Some("#"),
        live_url: Some("#"),
        accent: Accent::Purple,
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Product Manager",
        company: "TechFlow Inc",
        message: "Alex delivered an exceptional e-commerce platform that exceeded our expectations. \
                  The attention to detail and user experience is outstanding.",
        rating: 5,
        accent: Accent::Blue,
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO",
        company: "StartupXYZ",
        message: "Working with Alex was a game-changer for our team. His full-stack expertise and \
                  problem-solving skills are top-notch.",
        rating: 5,
        accent: Accent::Pink,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Design Director",
        company: "Creative Labs",
        message: "Alex seamlessly brought our complex designs to life with pixel-perfect precision \
                  and smooth animations. Truly impressive work.",
        rating: 5,
        accent: Accent::Purple,
    },
];

pub const TECHNOLOGIES: [Technology; 16] = [
    Technology { name: "React", category: TechCategory::Frontend, level: 95 },
    Technology { name: "TypeScript", category: TechCategory::Frontend, level: 90 },
    Technology { name: "Next.js", category: TechCategory::Frontend, level: 88 },
    Technology { name: "Tailwind", category: TechCategory::Frontend, level: 92 },
    Technology { name: "Node.js", category: TechCategory::Backend, level: 92 },
    Technology { name: "Express", category: TechCategory::Backend, level: 90 },
    Technology { name: "Python", category: TechCategory::Backend, level: 85 },
    Technology { name: "GraphQL", category: TechCategory::Backend, level: 80 },
    Technology { name: "PostgreSQL", category: TechCategory::Database, level: 88 },
    Technology { name: "MongoDB", category: TechCategory::Database, level: 85 },
    Technology { name: "Redis", category: TechCategory::Database, level: 75 },
    Technology { name: "Prisma", category: TechCategory::Database, level: 82 },
    Technology { name: "AWS", category: TechCategory::Tools, level: 85 },
    Technology { name: "Docker", category: TechCategory::Tools, level: 88 },
    Technology { name: "Git", category: TechCategory::Tools, level: 95 },
    Technology { name: "Figma", category: TechCategory::Tools, level: 80 },
];

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        number: "50+",
        label: "Projects Completed",
        description: "Successfully delivered projects ranging from startups to enterprise",
        accent: Accent::Blue,
    },
    Achievement {
        number: "4.9",
        label: "Client Rating",
        description: "Average rating from satisfied clients across all platforms",
        accent: Accent::Pink,
    },
    Achievement {
        number: "25+",
        label: "Happy Clients",
        description: "Businesses that trusted me to bring their ideas to life",
        accent: Accent::Purple,
    },
    Achievement {
        number: "5+",
        label: "Years Experience",
        description: "Continuous learning and growth in web development",
        accent: Accent::Green,
    },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Full-Stack Development",
        description: "Complete web application development from concept to deployment",
        features: &["React & Next.js", "Node.js & Express", "Database Design", "API Development"],
        accent: Accent::Blue,
    },
    Service {
        title: "UI/UX Implementation",
        description: "Pixel-perfect design implementation with modern animations",
        features: &["Responsive Design", "Framer Motion", "CSS Animations", "User Experience"],
        accent: Accent::Pink,
    },
    Service {
        title: "Backend Solutions",
        description: "Scalable server architecture and database optimization",
        features: &[
            "REST APIs",
            "Database Design",
            "Cloud Deployment",
            "Performance Optimization",
        ],
        accent: Accent::Purple,
    },
];

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Building Scalable React Applications with TypeScript",
        excerpt: "Learn how to structure large React applications using TypeScript, best practices \
                  for component architecture, and advanced patterns for maintainable code.",
        date: "Dec 15, 2024",
        read_time: "8 min read",
        category: "React",
        accent: Accent::Blue,
    },
    BlogPost {
        title: "Modern CSS Animations and Framer Motion",
        excerpt: "Explore the latest in web animations, from CSS transforms to advanced Framer \
                  Motion techniques that create engaging user experiences.",
        date: "Dec 10, 2024",
        read_time: "6 min read",
        category: "Animation",
        accent: Accent::Pink,
    },
    BlogPost {
        title: "Database Design Patterns for Modern Web Apps",
        excerpt: "Deep dive into database optimization, indexing strategies, and choosing the \
                  right database technology for your next project.",
        date: "Dec 5, 2024",
        read_time: "10 min read",
        category: "Backend",
        accent: Accent::Purple,
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { title: "Email", value: "alex.morgan@email.com", accent: Accent::Blue },
    ContactChannel { title: "LinkedIn", value: "in/alex-morgan-dev", accent: Accent::Pink },
    ContactChannel { title: "GitHub", value: "github.com/alexmorgan", accent: Accent::Purple },
];

/// Technologies grouped by category, categories in first-seen order
pub fn tech_by_category() -> Vec<(TechCategory, Vec<&'static Technology>)> {
    let mut groups: Vec<(TechCategory, Vec<&'static Technology>)> = Vec::new();
    for tech in TECHNOLOGIES.iter() {
        match groups.iter_mut().find(|(category, _)| *category == tech.category) {
            Some((_, techs)) => techs.push(tech),
            None => groups.push((tech.category, vec![tech])),
        }
    }
    groups
}

/// Start delay for a skill bar after the section becomes visible
pub fn skill_stagger(category_index: usize, skill_index: usize) -> Duration {
    Duration::from_millis(((category_index * 3 + skill_index) * 200) as u64)
}

/// Start delay for a tech-stack bar after the section becomes visible
pub fn tech_stagger(category_index: usize, index: usize) -> Duration {
    Duration::from_millis((category_index * 200 + index * 100 + 500) as u64)
}

/// Start delay for the n-th card in a staggered list
pub fn card_stagger(index: usize) -> Duration {
    Duration::from_millis((index * 200) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_grouping_preserves_order() {
        let groups = tech_by_category();
        let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                TechCategory::Frontend,
                TechCategory::Backend,
                TechCategory::Database,
                TechCategory::Tools
            ]
        );
        assert!(groups.iter().all(|(_, techs)| techs.len() == 4));
        assert_eq!(groups[0].1[0].name, "React");
        assert_eq!(groups[3].1[3].name, "Figma");
    }

    #[test]
    fn test_skill_stagger() {
        assert_eq!(skill_stagger(0, 0), Duration::ZERO);
        assert_eq!(skill_stagger(0, 2), Duration::from_millis(400));
        assert_eq!(skill_stagger(1, 0), Duration::from_millis(600));
        assert_eq!(skill_stagger(2, 0), Duration::from_millis(1200));
    }

    #[test]
    fn test_levels_are_percentages() {
        assert!(SKILLS.iter().flat_map(|c| c.skills).all(|s| s.level <= 100));
        assert!(TECHNOLOGIES.iter().all(|t| t.level <= 100));
    }

    #[test]
    fn test_services_and_posts_sit_between_their_neighbours() {
        let index = |id| SectionId::ALL.iter().position(|s| *s == id).unwrap();
        assert_eq!(index(SectionId::Services), index(SectionId::About) + 1);
        assert_eq!(index(SectionId::Blog) + 1, index(SectionId::Contact));
        assert!(SERVICES.iter().all(|s| s.features.len() == 4));
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
    }

    #[test]
    fn test_nav_items_in_document_order() {
        let sections: Vec<_> = NAV_ITEMS.iter().map(|n| n.section).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
    }
}
