//! L3 Molecular Layer: Pointer-reactive orb field
//!
//! Positions live in a virtual pixel space where one terminal cell is
//! [`CELL_WIDTH_PX`] x [`CELL_HEIGHT_PX`]. Orbs drift on a fixed tick; their
//! displayed positions chase `base + parallax` through springs, and a cursor
//! marker chases the raw pointer.

use std::time::Duration;

use folio_core::MotionConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

use super::signals::{SignalHub, Subscription, Topic, UiSignal};
use super::spring::Spring2;
use super::timing::{ping_pong, Interval};

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

pub const PALETTE: [Color; 4] = [
    Color::Rgb(0x00, 0x70, 0xF3),
    Color::Rgb(0xFF, 0x00, 0x80),
    Color::Rgb(0x79, 0x28, 0xCA),
    Color::Rgb(0x00, 0xDF, 0xD8),
];

const ORB_STIFFNESS: f64 = 50.0;
const ORB_DAMPING: f64 = 20.0;
const CURSOR_STIFFNESS: f64 = 500.0;
const CURSOR_DAMPING: f64 = 28.0;
const DRIFT_STEP: f64 = 0.5;
const PULSE_PERIOD: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center of a terminal cell in virtual pixels
pub fn cell_to_px(column: u16, row: u16) -> Point {
    Point::new(
        (column as f64 + 0.5) * CELL_WIDTH_PX,
        (row as f64 + 0.5) * CELL_HEIGHT_PX,
    )
}

#[derive(Debug, Clone)]
pub struct Orb {
    pub id: usize,
    pub base: Point,
    /// Diameter in virtual pixels
    pub size: f64,
    pub color: Color,
    pub opacity: f64,
    pub speed: f64,
    display: Spring2,
}

impl Orb {
    fn generate<R: Rng + ?Sized>(id: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let base = Point::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
        Self {
            id,
            base,
            size: rng.gen::<f64>() * 300.0 + 100.0,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            opacity: rng.gen::<f64>() * 0.1 + 0.05,
            speed: rng.gen::<f64>() * 0.5 + 0.2,
            display: Spring2::new(base.x, base.y, ORB_STIFFNESS, ORB_DAMPING),
        }
    }

    pub fn displayed(&self) -> Point {
        let (x, y) = self.display.position();
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub count: usize,
    pub tick: Duration,
    pub pointer_coefficient: f64,
    pub clamp: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 8,
            tick: Duration::from_millis(50),
            pointer_coefficient: 0.01,
            clamp: true,
        }
    }
}

impl From<&MotionConfig> for FieldConfig {
    fn from(config: &MotionConfig) -> Self {
        Self {
            count: config.orb_count,
            tick: Duration::from_millis(config.orb_tick_ms),
            pointer_coefficient: config.pointer_coefficient,
            clamp: config.clamp_orbs,
        }
    }
}

#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    orbs: Vec<Orb>,
    width: f64,
    height: f64,
    pointer: Option<Point>,
    cursor: Spring2,
    interval: Interval,
    tick_time: Duration,
    elapsed: Duration,
    subscription: Option<Subscription>,
}

impl ParticleField {
    /// Generate the field for a viewport of `columns` x `rows` cells
    pub fn with_rng<R: Rng + ?Sized>(config: FieldConfig, columns: u16, rows: u16, rng: &mut R) -> Self {
        let width = columns as f64 * CELL_WIDTH_PX;
        let height = rows as f64 * CELL_HEIGHT_PX;
        let orbs = (0..config.count)
            .map(|id| Orb::generate(id, width, height, rng))
            .collect();
        Self {
            config,
            orbs,
            width,
            height,
            pointer: None,
            cursor: Spring2::new(width / 2.0, height / 2.0, CURSOR_STIFFNESS, CURSOR_DAMPING),
            interval: Interval::new(config.tick),
            tick_time: Duration::ZERO,
            elapsed: Duration::ZERO,
            subscription: None,
        }
    }

    pub fn seeded(config: FieldConfig, columns: u16, rows: u16, seed: u64) -> Self {
        Self::with_rng(config, columns, rows, &mut StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise from the thread RNG
    pub fn from_motion(config: &MotionConfig, columns: u16, rows: u16) -> Self {
        let field = FieldConfig::from(config);
        match config.seed {
            Some(seed) => Self::seeded(field, columns, rows, seed),
            None => Self::with_rng(field, columns, rows, &mut rand::thread_rng()),
        }
    }

    pub fn attach(&mut self, hub: &SignalHub) {
        self.subscription = Some(hub.subscribe(&[Topic::Pointer, Topic::Resize]));
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.apply_signals();

        for _ in 0..self.interval.advance(dt) {
            self.tick_time += self.interval.period();
            self.drift();
        }

        let (dx, dy) = self.parallax();
        for orb in &mut self.orbs {
            orb.display.set_target(orb.base.x + dx, orb.base.y + dy);
            orb.display.step(dt);
        }

        if let Some(pointer) = self.pointer {
            self.cursor.set_target(pointer.x, pointer.y);
        }
        self.cursor.step(dt);
        self.elapsed += dt;
    }

    fn apply_signals(&mut self) {
        let Some(sub) = &self.subscription else {
            return;
        };
        for signal in sub.drain() {
            match signal {
                UiSignal::Pointer { x, y } => {
                    if self.pointer.is_none() {
                        self.cursor.snap(x, y);
                    }
                    self.pointer = Some(Point::new(x, y));
                }
                UiSignal::Resize { width, height } => {
                    self.width = width as f64 * CELL_WIDTH_PX;
                    self.height = height as f64 * CELL_HEIGHT_PX;
                }
                UiSignal::Scroll { .. } => {}
            }
        }
    }

    fn drift(&mut self) {
        let t_ms = self.tick_time.as_millis() as f64;
        for orb in &mut self.orbs {
            let phase = t_ms * 0.001 * orb.speed;
            orb.base.x += phase.sin() * DRIFT_STEP;
            orb.base.y += phase.cos() * DRIFT_STEP;
            if self.config.clamp {
                let r = orb.size / 2.0;
                orb.base.x = orb.base.x.clamp(-r, self.width + r);
                orb.base.y = orb.base.y.clamp(-r, self.height + r);
            }
        }
    }

    /// Offset of every orb from the pointer's distance to the viewport center
    fn parallax(&self) -> (f64, f64) {
        match self.pointer {
            Some(p) => (
                (p.x - self.width / 2.0) * self.config.pointer_coefficient,
                (p.y - self.height / 2.0) * self.config.pointer_coefficient,
            ),
            None => (0.0, 0.0),
        }
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Cursor marker position, once the pointer has been seen
    pub fn cursor(&self) -> Option<Point> {
        self.pointer.map(|_| {
            let (x, y) = self.cursor.position();
            Point::new(x, y)
        })
    }

    /// Shared breathing scale, 1.0 to 1.1 and back every four seconds
    pub fn pulse(&self) -> f64 {
        1.05 + ping_pong(self.elapsed, PULSE_PERIOD, Duration::ZERO, 0.05)
    }

    pub fn size_px(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn field(seed: u64) -> ParticleField {
        ParticleField::seeded(FieldConfig::default(), 100, 40, seed)
    }

    #[test]
    fn test_orb_count_constant() {
        let hub = SignalHub::new();
        let mut field = field(7);
        field.attach(&hub);
        assert_eq!(field.len(), 8);
        for i in 0..500u16 {
            if i % 50 == 0 {
                hub.publish(UiSignal::Resize { width: 60 + i / 10, height: 30 });
            }
            hub.publish(UiSignal::Pointer { x: i as f64, y: 20.0 });
            field.advance(FRAME);
            assert_eq!(field.len(), 8);
        }
    }

    #[test]
    fn test_attributes_in_range() {
        let field = field(42);
        let (w, h) = field.size_px();
        for orb in field.orbs() {
            assert!((0.0..w).contains(&orb.base.x));
            assert!((0.0..h).contains(&orb.base.y));
            assert!((100.0..400.0).contains(&orb.size));
            assert!((0.05..0.15).contains(&orb.opacity));
            assert!((0.2..0.7).contains(&orb.speed));
            assert!(PALETTE.contains(&orb.color));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = field(3);
        let mut b = field(3);
        for _ in 0..20 {
            a.advance(FRAME);
            b.advance(FRAME);
        }
        for (x, y) in a.orbs().iter().zip(b.orbs()) {
            assert_eq!(x.base, y.base);
            assert_eq!(x.displayed(), y.displayed());
        }
    }

    #[test]
    fn test_drift_runs_on_fixed_ticks() {
        let mut field = field(1);
        let before: Vec<Point> = field.orbs().iter().map(|o| o.base).collect();
        field.advance(Duration::from_millis(49));
        let after: Vec<Point> = field.orbs().iter().map(|o| o.base).collect();
        assert_eq!(before, after);

        field.advance(Duration::from_millis(1));
        let t = 0.05_f64;
        for (orb, start) in field.orbs().iter().zip(&before) {
            let expected = start.x + (t * orb.speed).sin() * DRIFT_STEP;
            assert!((orb.base.x - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_clamp_keeps_orbs_near_viewport() {
        let mut field = field(9);
        field.orbs[0].base = Point::new(-10_000.0, 50_000.0);
        field.advance(Duration::from_millis(50));
        let orb = &field.orbs()[0];
        let (_, h) = field.size_px();
        assert_eq!(orb.base.x, -orb.size / 2.0);
        assert_eq!(orb.base.y, h + orb.size / 2.0);
    }

    #[test]
    fn test_pointer_parallax() {
        let hub = SignalHub::new();
        // no drift ticks, so bases hold still
        let config = FieldConfig {
            tick: Duration::from_secs(3600),
            ..FieldConfig::default()
        };
        let mut field = ParticleField::seeded(config, 100, 40, 5);
        field.attach(&hub);
        let (w, h) = field.size_px();
        hub.publish(UiSignal::Pointer { x: w / 2.0 + 100.0, y: h / 2.0 });
        for _ in 0..300 {
            field.advance(FRAME);
        }
        for orb in field.orbs() {
            assert!((orb.displayed().x - (orb.base.x + 1.0)).abs() < 0.1);
        }
        let cursor = field.cursor().unwrap();
        assert!((cursor.x - (w / 2.0 + 100.0)).abs() < 0.1);
    }

    #[test]
    fn test_cursor_hidden_until_pointer_moves() {
        let mut field = field(2);
        field.advance(FRAME);
        assert!(field.cursor().is_none());
    }
}
