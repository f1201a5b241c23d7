//! L3 Molecular Layer: Floating background shapes
//!
//! Six translucent shapes pinned to the viewport. Each bobs on both axes,
//! spins and breathes on its own ease-in-out loop of 8 to 12 seconds.

use std::time::Duration;

use folio_core::MotionConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

use super::particles::Point;
use super::timing::ping_pong;

const BOB_X_PX: f64 = 10.0;
const BOB_Y_PX: f64 = 20.0;
const MIN_PERIOD_SECS: f64 = 8.0;
const PERIOD_SPREAD_SECS: f64 = 4.0;
pub const SHAPE_OPACITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// Rotation swings from the first angle to the second and back, in degrees
    fn swing(self) -> (f64, f64) {
        match self {
            Shape::Triangle => (45.0, 135.0),
            Shape::Circle | Shape::Square => (0.0, 360.0),
        }
    }

    /// Whether `p`, relative to the center of an unrotated shape `size` wide, is inside
    fn covers(self, p: Point, size: f64) -> bool {
        let r = size / 2.0;
        match self {
            Shape::Circle => p.x * p.x + p.y * p.y <= r * r,
            Shape::Square => p.x.abs() <= r && p.y.abs() <= r,
            // apex up, base along the bottom edge
            Shape::Triangle => p.y <= r && p.y >= -r && p.x.abs() <= (p.y + r) / 2.0,
        }
    }
}

/// Distance from one viewport edge, as a fraction of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    Start(f64),
    End(f64),
}

impl Inset {
    /// Leading edge of a box `size` long inside `extent`
    fn resolve(self, extent: f64, size: f64) -> f64 {
        match self {
            Inset::Start(f) => extent * f,
            Inset::End(f) => extent - extent * f - size,
        }
    }
}

/// (shape, size in px, color, horizontal inset, vertical inset, delay)
const LAYOUT: [(Shape, f64, Color, Inset, Inset, Duration); 6] = [
    (Shape::Circle, 60.0, Color::Rgb(0x3b, 0x82, 0xf6), Inset::Start(0.10), Inset::Start(0.10), Duration::ZERO),
    (Shape::Square, 40.0, Color::Rgb(0xec, 0x48, 0x99), Inset::End(0.15), Inset::Start(0.20), Duration::from_secs(2)),
    (Shape::Triangle, 50.0, Color::Rgb(0xa8, 0x55, 0xf7), Inset::Start(0.20), Inset::End(0.30), Duration::from_secs(4)),
    (Shape::Circle, 35.0, Color::Rgb(0x22, 0xc5, 0x5e), Inset::End(0.10), Inset::Start(0.60), Duration::from_secs(1)),
    (Shape::Square, 45.0, Color::Rgb(0xea, 0xb3, 0x08), Inset::End(0.25), Inset::End(0.15), Duration::from_secs(3)),
    (Shape::Circle, 25.0, Color::Rgb(0x06, 0xb6, 0xd4), Inset::Start(0.05), Inset::Start(0.40), Duration::from_secs(5)),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floater {
    pub shape: Shape,
    /// Unscaled width and height in virtual pixels
    pub size: f64,
    pub color: Color,
    pub left: Inset,
    pub top: Inset,
    pub delay: Duration,
    pub period: Duration,
}

/// Where a floater is drawn at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub center: Point,
    /// Scaled size
    pub size: f64,
    pub angle_deg: f64,
}

impl Floater {
    pub fn pose(&self, elapsed: Duration, width: f64, height: f64) -> Pose {
        let wave = |amplitude| ping_pong(elapsed, self.period, self.delay, amplitude);
        let (from, to) = self.shape.swing();
        let half_swing = (to - from) / 2.0;
        Pose {
            center: Point::new(
                self.left.resolve(width, self.size) + self.size / 2.0 + wave(BOB_X_PX),
                self.top.resolve(height, self.size) + self.size / 2.0 + wave(BOB_Y_PX),
            ),
            size: self.size * (1.05 + wave(0.05)),
            angle_deg: from + half_swing + wave(half_swing),
        }
    }

    /// Whether the point `p` falls inside the shape at `pose`
    pub fn covers(&self, pose: &Pose, p: Point) -> bool {
        let (sin, cos) = (-pose.angle_deg.to_radians()).sin_cos();
        let (dx, dy) = (p.x - pose.center.x, p.y - pose.center.y);
        let local = Point::new(dx * cos - dy * sin, dx * sin + dy * cos);
        self.shape.covers(local, pose.size)
    }
}

#[derive(Debug, Clone)]
pub struct Floaters {
    floaters: Vec<Floater>,
}

impl Floaters {
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let floaters = LAYOUT
            .iter()
            .map(|&(shape, size, color, left, top, delay)| Floater {
                shape,
                size,
                color,
                left,
                top,
                delay,
                period: Duration::from_secs_f64(MIN_PERIOD_SECS + rng.gen::<f64>() * PERIOD_SPREAD_SECS),
            })
            .collect();
        Self { floaters }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise from the thread RNG
    pub fn from_motion(config: &MotionConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::with_rng(&mut rand::thread_rng()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Floater> {
        self.floaters.iter()
    }

    pub fn len(&self) -> usize {
        self.floaters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floaters.is_empty()
    }
}
