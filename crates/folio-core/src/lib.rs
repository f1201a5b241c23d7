pub mod client;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod server;

pub use client::SiteClient;
pub use config::{AppConfig, EasingType, MotionConfig};
pub use contact::{ContactReply, ContactSubmission};
pub use error::{Error, Result};
pub use server::SiteServer;
