use folio_core::content::Accent;
use ratatui::style::Color;

/// Dark palette for the portfolio page
pub struct Midnight;

impl Midnight {
    // Background colors
    pub const BG0: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const BG1: Color = Color::Rgb(0x11, 0x11, 0x14);
    pub const BG2: Color = Color::Rgb(0x1c, 0x1c, 0x22);
    pub const BG3: Color = Color::Rgb(0x2a, 0x2a, 0x33);

    // Foreground colors
    pub const FG0: Color = Color::Rgb(0xff, 0xff, 0xff);
    pub const FG1: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
    pub const GREY0: Color = Color::Rgb(0x4b, 0x55, 0x63);
    pub const GREY1: Color = Color::Rgb(0x6b, 0x72, 0x80);
    pub const GREY2: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

    // Accents
    pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
    pub const PINK: Color = Color::Rgb(0xec, 0x48, 0x99);
    pub const PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
    pub const GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
    pub const YELLOW: Color = Color::Rgb(0xfa, 0xcc, 0x15);

    // Semantic colors
    pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
    pub const SUCCESS: Color = Self::GREEN;
    pub const ACCENT: Color = Self::BLUE;
}

pub fn accent(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Midnight::BLUE,
        Accent::Pink => Midnight::PINK,
        Accent::Purple => Midnight::PURPLE,
        Accent::Green => Midnight::GREEN,
    }
}

/// Blend `color` over the page background; `t = 0` is invisible, `1` is the
/// full color
pub fn fade(color: Color, t: f64) -> Color {
    mix(Midnight::BG0, color, t)
}

/// Linear blend of two RGB colors. Non-RGB colors snap at the midpoint.
pub fn mix(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(ch(r0, r1), ch(g0, g1), ch(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(Midnight::BLUE, 0.0), Midnight::BG0);
        assert_eq!(fade(Midnight::BLUE, 1.0), Midnight::BLUE);
        assert_eq!(mix(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }
}
