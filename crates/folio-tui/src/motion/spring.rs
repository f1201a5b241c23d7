//! L4 Atomic Layer: Damped spring integration
//!
//! Unit mass, semi-implicit Euler, stepped in small fixed substeps so a
//! long frame does not blow up a stiff spring.

use std::time::Duration;

const SUBSTEP: f64 = 0.004;
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
}

impl Spring {
    pub fn new(value: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with no residual motion
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Pair of springs sharing parameters, for 2D positions
#[derive(Debug, Clone, Copy)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(x: f64, y: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            x: Spring::new(x, stiffness, damping),
            y: Spring::new(y, stiffness, damping),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn snap(&mut self, x: f64, y: f64) {
        self.x.snap(x);
        self.y.snap(y);
    }

    pub fn step(&mut self, dt: Duration) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(0.0, 50.0, 20.0);
        spring.set_target(100.0);
        for _ in 0..200 {
            spring.step(Duration::from_millis(16));
        }
        assert!((spring.value() - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_stiff_spring_stable_on_long_frame() {
        let mut spring = Spring::new(0.0, 500.0, 28.0);
        spring.set_target(10.0);
        spring.step(Duration::from_secs(2));
        assert!(spring.value().is_finite());
        assert!((spring.value() - 10.0).abs() < 0.5);
    }

    #[test]
    fn test_snap_clears_motion() {
        let mut spring = Spring2::new(0.0, 0.0, 50.0, 20.0);
        spring.set_target(40.0, 40.0);
        spring.step(Duration::from_millis(30));
        spring.snap(5.0, 6.0);
        spring.step(Duration::from_millis(30));
        assert_eq!(spring.position(), (5.0, 6.0));
    }
}
