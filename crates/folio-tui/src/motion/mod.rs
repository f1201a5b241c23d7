//! Animation engine for the portfolio page
//!
//! Every primitive is advanced with an explicit elapsed duration and reads
//! scroll, pointer and resize input from a [`SignalHub`]. The UI loop
//! publishes input, calls each primitive's `on_frame`/`advance`, then draws.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, in-out)
//! - `timing` - Progress, interpolation, one-shot and repeating timers
//! - `spring` - Damped spring integration
//! - `config` - Duration views over the motion settings
//!
//! ## L3 Molecular Layer
//! - `signals` - Coalescing signal hub with RAII subscriptions
//! - `animation` - Smooth page scrolling
//! - `typer` - Timed text typer
//! - `visibility` - One-shot viewport visibility latches
//! - `scroll_progress` - Scroll ratio tracker
//! - `particles` - Pointer-reactive orb field
//! - `motes` - Rising background motes
//! - `floaters` - Bobbing, spinning background shapes
//! - `reveal` - Entrance animations timed from visibility
//!
//! # Usage
//!
//! ```ignore
//! use folio_tui::motion::{SignalHub, ScrollProgress, UiSignal};
//!
//! let hub = SignalHub::new();
//! let mut progress = ScrollProgress::new();
//! progress.attach(&hub);
//! progress.set_document_height(200);
//!
//! hub.publish(UiSignal::Resize { width: 80, height: 40 });
//! hub.publish(UiSignal::Scroll { offset: 80 });
//! progress.on_frame();
//! assert_eq!(progress.ratio(), 0.5);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod spring;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod floaters;
pub mod motes;
pub mod particles;
pub mod reveal;
pub mod scroll_progress;
pub mod signals;
pub mod typer;
pub mod visibility;

pub use animation::ScrollAnimator;
pub use config::{MotionConfigExt, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use floaters::{Floater, Floaters, Pose, Shape};
pub use motes::{MoteField, MoteSample};
pub use particles::{FieldConfig, Orb, ParticleField, Point};
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use signals::{SignalHub, Subscription, Topic, UiSignal};
pub use typer::{TypedLine, Typewriter, TypingPhase};
pub use visibility::{InViewLatch, Span, VisibilityTracker};
