//! L3 Molecular Layer: Rising motes
//!
//! Faint dots climbing from just below the viewport to just above it on a
//! linear loop, sliding right as they go. Each fades in over the first third
//! of a climb and out over the last. Positions share the orb field's virtual
//! pixel space and stay fixed to the viewport while the page scrolls.

use std::time::Duration;

use folio_core::MotionConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::particles::{Point, CELL_HEIGHT_PX, CELL_WIDTH_PX};
use super::signals::{SignalHub, Subscription, Topic, UiSignal};
use super::timing::lerp;

const MAX_DELAY_SECS: f64 = 20.0;
const MIN_CLIMB_SECS: f64 = 20.0;
const CLIMB_SPREAD_SECS: f64 = 10.0;
/// Distance past the viewport edge where a climb starts and ends
const OVERSHOOT_PX: f64 = 10.0;
/// Sideways travel over one climb
const SLIDE_PX: f64 = 100.0;
pub const PEAK_OPACITY: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    /// Starting column as a fraction of the viewport width
    pub x: f64,
    pub delay: Duration,
    /// Time for one climb
    pub climb: Duration,
}

impl Mote {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>(),
            delay: Duration::from_secs_f64(rng.gen::<f64>() * MAX_DELAY_SECS),
            climb: Duration::from_secs_f64(MIN_CLIMB_SECS + rng.gen::<f64>() * CLIMB_SPREAD_SECS),
        }
    }

    /// How far through its current climb the mote is, `None` before the first
    pub fn phase(&self, elapsed: Duration) -> Option<f64> {
        if elapsed < self.delay || self.climb.is_zero() {
            return None;
        }
        let climb = self.climb.as_secs_f64();
        Some((elapsed - self.delay).as_secs_f64() % climb / climb)
    }
}

/// Opacity keyframes `0, 1, 1, 0` spread evenly over a climb
pub fn envelope(phase: f64) -> f64 {
    let t = phase.clamp(0.0, 1.0) * 3.0;
    if t < 1.0 {
        t
    } else if t < 2.0 {
        1.0
    } else {
        3.0 - t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoteSample {
    pub position: Point,
    pub opacity: f64,
}

#[derive(Debug)]
pub struct MoteField {
    motes: Vec<Mote>,
    width: f64,
    height: f64,
    elapsed: Duration,
    subscription: Option<Subscription>,
}

impl MoteField {
    pub fn with_rng<R: Rng + ?Sized>(count: usize, columns: u16, rows: u16, rng: &mut R) -> Self {
        Self {
            motes: (0..count).map(|_| Mote::generate(rng)).collect(),
            width: columns as f64 * CELL_WIDTH_PX,
            height: rows as f64 * CELL_HEIGHT_PX,
            elapsed: Duration::ZERO,
            subscription: None,
        }
    }

    pub fn seeded(count: usize, columns: u16, rows: u16, seed: u64) -> Self {
        Self::with_rng(count, columns, rows, &mut StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise from the thread RNG
    pub fn from_motion(config: &MotionConfig, columns: u16, rows: u16) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.mote_count, columns, rows, seed),
            None => Self::with_rng(config.mote_count, columns, rows, &mut rand::thread_rng()),
        }
    }

    pub fn attach(&mut self, hub: &SignalHub) {
        self.subscription = Some(hub.subscribe(&[Topic::Resize]));
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(sub) = &self.subscription {
            for signal in sub.drain() {
                if let UiSignal::Resize { width, height } = signal {
                    self.width = width as f64 * CELL_WIDTH_PX;
                    self.height = height as f64 * CELL_HEIGHT_PX;
                }
            }
        }
        self.elapsed += dt;
    }

    /// Every mote that has started climbing, with its position and opacity
    pub fn samples(&self) -> impl Iterator<Item = MoteSample> + '_ {
        self.motes.iter().filter_map(move |mote| {
            let phase = mote.phase(self.elapsed)?;
            Some(MoteSample {
                position: Point::new(
                    mote.x * self.width + lerp(0.0, SLIDE_PX, phase),
                    lerp(self.height + OVERSHOOT_PX, -OVERSHOOT_PX, phase),
                ),
                opacity: envelope(phase) * PEAK_OPACITY,
            })
        })
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }

    pub fn size_px(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ranges() {
        let field = MoteField::seeded(50, 80, 24, 4);
        assert_eq!(field.len(), 50);
        for mote in field.motes() {
            assert!((0.0..1.0).contains(&mote.x));
            assert!(mote.delay < Duration::from_secs(20));
            assert!(mote.climb >= Duration::from_secs(20));
            assert!(mote.climb < Duration::from_secs(30));
        }
    }

    #[test]
    fn test_waits_for_delay() {
        let mote = Mote {
            x: 0.5,
            delay: Duration::from_secs(5),
            climb: Duration::from_secs(20),
        };
        assert_eq!(mote.phase(Duration::from_secs(4)), None);
        assert_eq!(mote.phase(Duration::from_secs(5)), Some(0.0));
        assert_eq!(mote.phase(Duration::from_secs(15)), Some(0.5));
        // loops
        assert_eq!(mote.phase(Duration::from_secs(30)), Some(0.25));
    }

    #[test]
    fn test_envelope_keyframes() {
        assert_eq!(envelope(0.0), 0.0);
        assert!((envelope(1.0 / 6.0) - 0.5).abs() < 1e-9);
        assert_eq!(envelope(0.5), 1.0);
        assert!(envelope(1.0).abs() < 1e-9);
    }

    #[test]
    fn test_climbs_and_slides() {
        let mut field = MoteField::seeded(1, 80, 24, 8);
        let delay = field.motes()[0].delay;
        field.advance(delay);
        let start = field.samples().next().unwrap();
        let (w, h) = field.size_px();
        assert_eq!(start.position.y, h + OVERSHOOT_PX);
        assert_eq!(start.opacity, 0.0);

        field.advance(field.motes()[0].climb / 2);
        let mid = field.samples().next().unwrap();
        assert!((mid.position.y - (h / 2.0)).abs() < 1e-6);
        assert!((mid.position.x - (field.motes()[0].x * w + SLIDE_PX / 2.0)).abs() < 1e-6);
        assert!((mid.opacity - PEAK_OPACITY).abs() < 1e-9);
    }

    #[test]
    fn test_resize_rescales_climb() {
        let hub = SignalHub::new();
        let mut field = MoteField::seeded(10, 80, 24, 2);
        field.attach(&hub);
        hub.publish(UiSignal::Resize { width: 40, height: 10 });
        field.advance(Duration::from_millis(16));
        assert_eq!(field.size_px(), (40.0 * CELL_WIDTH_PX, 10.0 * CELL_HEIGHT_PX));
        assert_eq!(field.len(), 10);
    }
}
