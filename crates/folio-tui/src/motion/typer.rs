//! L3 Molecular Layer: Timed text typer
//!
//! Reveals a list of lines one character at a time, holds each finished line,
//! then moves on with an empty buffer. The last line is held for good.

use std::time::Duration;

use super::timing::Timeout;

pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
}

/// One input line as it should currently be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedLine<'a> {
    Complete(&'a str),
    Active(&'a str),
    Pending,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    active: usize,
    revealed: usize,
    phase: TypingPhase,
    speed: Duration,
    hold: Duration,
    timer: Timeout,
}

impl Typewriter {
    pub fn new<I, S>(lines: I, speed: Duration, hold: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut typer = Self {
            lines: lines.into_iter().map(Into::into).collect(),
            active: 0,
            revealed: 0,
            phase: TypingPhase::Holding,
            speed,
            hold,
            timer: Timeout::new(),
        };
        if !typer.lines.is_empty() {
            typer.enter_line(0);
        }
        typer
    }

    pub fn with_defaults<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines, DEFAULT_SPEED, DEFAULT_HOLD)
    }

    /// Advance by `dt`, applying every step that fell due. Returns whether
    /// the visible text changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut left = dt;
        let mut changed = false;
        while let Some(rest) = self.timer.advance(left) {
            self.step();
            changed = true;
            left = rest;
        }
        changed
    }

    pub fn rendered(&self) -> Vec<TypedLine<'_>> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i < self.active {
                    TypedLine::Complete(line)
                } else if i == self.active {
                    TypedLine::Active(char_prefix(line, self.revealed))
                } else {
                    TypedLine::Pending
                }
            })
            .collect()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    #[inline]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Holding the last line with nothing left to schedule
    pub fn is_finished(&self) -> bool {
        self.phase == TypingPhase::Holding && !self.timer.is_pending()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn active_char_len(&self) -> usize {
        self.lines
            .get(self.active)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    fn enter_line(&mut self, index: usize) {
        self.active = index;
        self.revealed = 0;
        self.phase = TypingPhase::Typing;
        self.schedule();
    }

    /// Arm the single pending timer for whatever the current state needs next
    fn schedule(&mut self) {
        self.timer.cancel();
        if self.revealed < self.active_char_len() {
            self.phase = TypingPhase::Typing;
            self.timer.arm(self.speed);
            return;
        }
        self.phase = TypingPhase::Holding;
        if self.active + 1 < self.lines.len() {
            self.timer.arm(self.hold);
        }
    }

    fn step(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                self.revealed += 1;
                self.schedule();
            }
            TypingPhase::Holding => self.enter_line(self.active + 1),
        }
    }
}

/// First `n` characters of `s`
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn hero() -> Typewriter {
        Typewriter::new(["Hi", "Hi, I'm X"], 100 * MS, 1000 * MS)
    }

    fn active_text<'a>(typer: &'a Typewriter) -> &'a str {
        match typer.rendered()[typer.active_index()] {
            TypedLine::Active(text) => text,
            other => panic!("active line rendered as {:?}", other),
        }
    }

    #[test]
    fn test_starts_empty() {
        let typer = hero();
        assert_eq!(typer.active_index(), 0);
        assert_eq!(active_text(&typer), "");
        assert_eq!(typer.rendered()[1], TypedLine::Pending);
    }

    #[test]
    fn test_prefix_bounded_and_monotonic() {
        let mut typer = hero();
        let mut prev = (0, 0);
        for _ in 0..400 {
            typer.advance(17 * MS);
            let line = typer.active_index();
            let revealed = typer.revealed_len();
            assert!(revealed <= typer.lines[line].chars().count());
            if line == prev.0 {
                assert!(revealed >= prev.1);
            } else {
                assert!(line > prev.0);
            }
            prev = (line, revealed);
        }
    }

    #[test]
    fn test_hold_then_next_line() {
        let mut typer = hero();
        typer.advance(200 * MS);
        assert_eq!(active_text(&typer), "Hi");
        assert_eq!(typer.phase(), TypingPhase::Holding);

        typer.advance(999 * MS);
        assert_eq!(typer.active_index(), 0);
        typer.advance(MS);
        assert_eq!(typer.active_index(), 1);
        assert_eq!(active_text(&typer), "");
        assert_eq!(typer.rendered()[0], TypedLine::Complete("Hi"));
    }

    #[test]
    fn test_last_line_held_forever() {
        let mut typer = hero();
        typer.advance(Duration::from_secs(60));
        assert_eq!(typer.active_index(), 1);
        assert_eq!(active_text(&typer), "Hi, I'm X");
        assert!(typer.is_finished());
        assert!(!typer.advance(Duration::from_secs(60)));
    }

    #[test]
    fn test_single_large_step_equals_many_small() {
        let mut a = hero();
        let mut b = hero();
        a.advance(1450 * MS);
        for _ in 0..145 {
            b.advance(10 * MS);
        }
        assert_eq!(a.active_index(), b.active_index());
        assert_eq!(a.revealed_len(), b.revealed_len());
    }

    #[test]
    fn test_empty_inputs() {
        let typer = Typewriter::with_defaults(Vec::<String>::new());
        assert!(typer.rendered().is_empty());
        assert!(typer.is_finished());

        let mut typer = Typewriter::new(["", "ab"], 10 * MS, 50 * MS);
        assert_eq!(typer.phase(), TypingPhase::Holding);
        typer.advance(50 * MS);
        assert_eq!(typer.active_index(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut typer = Typewriter::new(["héllo"], 10 * MS, 10 * MS);
        typer.advance(20 * MS);
        assert_eq!(active_text(&typer), "hé");
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("abc", 0), "");
        assert_eq!(char_prefix("abc", 2), "ab");
        assert_eq!(char_prefix("abc", 9), "abc");
    }
}
