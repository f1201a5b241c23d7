pub mod app;
pub mod contact_form;
pub mod event;
pub mod input;
pub mod motion;
pub mod notification;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Midnight;
