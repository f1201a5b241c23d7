use std::time::Duration;

use folio_core::content::SectionId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::app::App;
use crate::motion::floaters::SHAPE_OPACITY;
use crate::motion::particles::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::motion::timing::ping_pong;
use crate::motion::{Floater, MoteSample, Orb, Point, Pose};
use crate::theme::{mix, Midnight};

/// Fraction of the radius over which an orb fades to nothing
const FALLOFF: f64 = 0.7;
/// Terminal cells are far coarser than pixels; boost the faint opacities
const GAIN: f64 = 2.0;

const BOB_PERIOD: Duration = Duration::from_secs(6);

/// (column fraction, row fraction, glyph, color, delay, amplitude in px)
const ACCENTS: [(f64, f64, &str, Color, Duration, f64); 3] = [
    (0.15, 0.25, "✦", Midnight::BLUE, Duration::ZERO, 20.0),
    (0.85, 0.35, "●", Midnight::PINK, Duration::from_secs(2), -20.0),
    (0.25, 0.75, "◆", Midnight::PURPLE, Duration::from_secs(4), 15.0),
];

/// Orb field tinted into the background of already drawn cells
pub struct OrbLayer<'a> {
    orbs: &'a [Orb],
    pulse: f64,
    /// Extra downward shift of every orb, in virtual pixels
    offset_y: f64,
    cursor: Option<Point>,
}

impl<'a> OrbLayer<'a> {
    /// The field as seen from the page, sinking as the reader scrolls
    pub fn new(app: &'a App) -> Self {
        let hero_rows = app
            .layout
            .span(SectionId::Home)
            .map_or(app.viewport.1 as f64, |s| s.height as f64);
        Self {
            orbs: app.particles.orbs(),
            pulse: app.particles.pulse(),
            offset_y: app.progress.interpolate(0.0, hero_rows) * CELL_HEIGHT_PX,
            cursor: app.particles.cursor(),
        }
    }
}

impl Widget for OrbLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let center = Point::new(
                    (col as f64 + 0.5) * CELL_WIDTH_PX,
                    (row as f64 + 0.5) * CELL_HEIGHT_PX - self.offset_y,
                );
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    let base = match cell.bg {
                        Color::Rgb(..) => cell.bg,
                        _ => Midnight::BG0,
                    };
                    cell.set_bg(tint(base, self.orbs, center, self.pulse));
                }
            }
        }

        if let Some(cursor) = self.cursor {
            let col = (cursor.x / CELL_WIDTH_PX).floor();
            let row = (cursor.y / CELL_HEIGHT_PX).floor();
            if col >= 0.0 && row >= 0.0 && col < area.width as f64 && row < area.height as f64 {
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    if cell.symbol() == " " {
                        cell.set_symbol("◯");
                        cell.set_fg(Midnight::GREY1);
                    }
                }
            }
        }
    }
}

/// Background color of a cell centered at `p` after every orb is blended in
pub fn tint(base: Color, orbs: &[Orb], p: Point, pulse: f64) -> Color {
    orbs.iter().fold(base, |color, orb| {
        let c = orb.displayed();
        let reach = orb.size * pulse / 2.0 * FALLOFF;
        let d = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
        if reach <= 0.0 || d >= reach {
            return color;
        }
        let weight = (1.0 - d / reach) * orb.opacity * GAIN;
        mix(color, orb.color, weight)
    })
}

/// Translucent shapes pinned to the viewport, tinted into cell backgrounds
pub struct ShapeLayer {
    shapes: Vec<(Floater, Pose)>,
}

impl ShapeLayer {
    pub fn new(app: &App) -> Self {
        let (width, height) = app.particles.size_px();
        let shapes = app
            .floaters
            .iter()
            .map(|f| (*f, f.pose(app.clock, width, height)))
            .collect();
        Self { shapes }
    }
}

impl Widget for ShapeLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (floater, pose) in &self.shapes {
            let reach = pose.size * std::f64::consts::SQRT_2 / 2.0;
            let cols = cell_range(pose.center.x, reach, CELL_WIDTH_PX, area.width);
            let rows = cell_range(pose.center.y, reach, CELL_HEIGHT_PX, area.height);
            for row in rows {
                for col in cols.clone() {
                    let center = Point::new(
                        (col as f64 + 0.5) * CELL_WIDTH_PX,
                        (row as f64 + 0.5) * CELL_HEIGHT_PX,
                    );
                    if !floater.covers(pose, center) {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                        let base = match cell.bg {
                            Color::Rgb(..) => cell.bg,
                            _ => Midnight::BG0,
                        };
                        cell.set_bg(mix(base, floater.color, SHAPE_OPACITY * GAIN));
                    }
                }
            }
        }
    }
}

/// Cells whose centers may lie within `reach` px of `center` along one axis
fn cell_range(center: f64, reach: f64, cell_px: f64, limit: u16) -> std::ops::Range<u16> {
    let first = ((center - reach) / cell_px).floor().max(0.0);
    let last = ((center + reach) / cell_px).ceil().min(limit as f64);
    if last <= first {
        return 0..0;
    }
    first as u16..last as u16
}

/// Dots climbing the viewport, drawn on blank cells only
pub struct MoteLayer {
    samples: Vec<MoteSample>,
}

impl MoteLayer {
    pub fn new(app: &App) -> Self {
        Self {
            samples: app.motes.samples().collect(),
        }
    }
}

impl Widget for MoteLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for sample in self.samples {
            if sample.opacity <= 0.0 {
                continue;
            }
            let col = (sample.position.x / CELL_WIDTH_PX).floor();
            let row = (sample.position.y / CELL_HEIGHT_PX).floor();
            if col < 0.0 || row < 0.0 || col >= area.width as f64 || row >= area.height as f64 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                if cell.symbol() == " " {
                    let base = match cell.bg {
                        Color::Rgb(..) => cell.bg,
                        _ => Midnight::BG0,
                    };
                    cell.set_symbol("·");
                    cell.set_fg(mix(base, Midnight::BLUE, sample.opacity));
                }
            }
        }
    }
}

/// Small glyphs bobbing over the hero, drawn on blank cells only
pub struct FloatingAccents {
    /// Screen row of the hero's first line; may be above the area
    hero_top: i32,
    hero_rows: i32,
    clock: Duration,
}

impl FloatingAccents {
    pub fn new(app: &App) -> Option<Self> {
        let span = app.layout.span(SectionId::Home)?;
        Some(Self {
            hero_top: span.top - app.page_scroll() as i32,
            hero_rows: span.height,
            clock: app.clock,
        })
    }
}

impl Widget for FloatingAccents {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (fx, fy, glyph, color, delay, amplitude) in ACCENTS {
            let bob = ping_pong(self.clock, BOB_PERIOD, delay, amplitude) / CELL_HEIGHT_PX;
            let row = self.hero_top + (self.hero_rows as f64 * fy + bob).round() as i32;
            let col = (area.width as f64 * fx) as u16;
            if row < 0 || row >= area.height as i32 || col >= area.width {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row as u16)) {
                if cell.symbol() == " " {
                    cell.set_symbol(glyph);
                    cell.set_fg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::FieldConfig;
    use crate::motion::ParticleField;

    #[test]
    fn test_tint_fades_with_distance() {
        let field = ParticleField::seeded(FieldConfig::default(), 80, 24, 3);
        let orb = &field.orbs()[0];
        let center = orb.displayed();

        let at_center = tint(Midnight::BG0, std::slice::from_ref(orb), center, 1.0);
        assert_ne!(at_center, Midnight::BG0);

        let far = Point::new(center.x + orb.size * 2.0, center.y);
        assert_eq!(tint(Midnight::BG0, std::slice::from_ref(orb), far, 1.0), Midnight::BG0);
    }

    #[test]
    fn test_cell_range_clips_to_area() {
        assert_eq!(cell_range(-100.0, 20.0, CELL_WIDTH_PX, 80), 0..0);
        assert_eq!(cell_range(40.0, 16.0, CELL_WIDTH_PX, 80), 3..7);
        assert_eq!(cell_range(630.0, 30.0, CELL_WIDTH_PX, 80), 75..80);
    }

    #[test]
    fn test_shape_layer_tints_only_under_shapes() {
        use std::sync::Arc;

        use folio_core::AppConfig;

        let mut config = AppConfig::default();
        config.ui.motion.seed = Some(3);
        let app = App::new(Arc::new(config), 80, 26);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ShapeLayer::new(&app).render(area, &mut buf);

        let tinted = |col: u16, row: u16| buf[(col, row)].bg != Color::Reset;
        // first circle: left 10%, top 10%, 60px wide, at rest 10px left and 20px up
        let circle_col = ((80.0 * 8.0 * 0.1 + 30.0 - 10.0) / CELL_WIDTH_PX) as u16;
        let circle_row = ((24.0 * 16.0 * 0.1 + 30.0 - 20.0) / CELL_HEIGHT_PX) as u16;
        assert!(tinted(circle_col, circle_row));
        assert!(!tinted(40, 12));
    }

    #[test]
    fn test_tint_without_orbs_keeps_base() {
        assert_eq!(tint(Midnight::BG1, &[], Point::new(10.0, 10.0), 1.0), Midnight::BG1);
    }
}
