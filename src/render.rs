//! Drawing-surface capability
//!
//! The simulation renders by describing outlines; an actual backend (GDI,
//! SpriteBatch, terminal, whatever the host has) implements [`Surface`].
//! Everything here is resolution-independent design-space geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::entity::Body;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Ship green (matches the classic palette's `Green`, not full-bright)
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Multiply every channel (alpha included) by a `[0, 1]`-clamped factor.
    pub fn scaled(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * opacity) as u8,
            g: (self.g as f32 * opacity) as u8,
            b: (self.b as f32 * opacity) as u8,
            a: (self.a as f32 * opacity) as u8,
        }
    }
}

/// Axis-aligned rectangle in design space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// What the simulation needs from a rendering backend.
///
/// `draw_polyline` receives local-space points and the scale → rotate →
/// translate transform to apply. Implementations connect consecutive
/// points and close the outline by joining the last point back to the
/// first; an empty point list draws nothing.
pub trait Surface {
    fn begin_frame(&mut self);

    fn end_frame(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_polyline(
        &mut self,
        points: &[Vec2],
        scale: f32,
        rotation: f32,
        position: Vec2,
        color: Color,
    );
}

/// Pass-through decorator that fades foreground drawing.
///
/// Used by the flow controller during a state transition: outline colors
/// are scaled by the current opacity while `fill_rect` (the background)
/// passes through untouched. Frame bracketing is owned by whoever wraps
/// the real surface, so `begin_frame`/`end_frame` are no-ops here.
pub struct FadeSurface<'a, S: Surface> {
    inner: &'a mut S,
    opacity: f32,
}

impl<'a, S: Surface> FadeSurface<'a, S> {
    pub fn new(inner: &'a mut S, opacity: f32) -> Self {
        Self {
            inner,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl<S: Surface> Surface for FadeSurface<'_, S> {
    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) {}

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        // Background stays at full opacity.
        self.inner.fill_rect(rect, color);
    }

    fn draw_polyline(
        &mut self,
        points: &[Vec2],
        scale: f32,
        rotation: f32,
        position: Vec2,
        color: Color,
    ) {
        self.inner
            .draw_polyline(points, scale, rotation, position, color.scaled(self.opacity));
    }
}

/// Draw an entity body as its transformed outline.
pub fn draw_entity<S: Surface>(surface: &mut S, body: &Body) {
    surface.draw_polyline(
        &body.vertices,
        body.scale,
        body.rotation,
        body.position,
        body.color,
    );
}

/// Draw a line of text centered on `position` using the vector glyphs.
///
/// Character cell is `2 * scale` wide with a fixed spacing of 5 design
/// units. Characters without a glyph are skipped silently.
pub fn draw_text<S: Surface>(surface: &mut S, text: &str, position: Vec2, scale: f32) {
    let character_size = scale * 2.0;
    let spacing = 5.0;

    let offset = (text.chars().count() / 2) as f32 * (character_size + spacing);
    let mut cursor = position - Vec2::new(offset, 0.0);
    for character in text.chars() {
        if let Some(vertices) = glyph(character) {
            surface.draw_polyline(vertices, scale, 0.0, cursor, Color::WHITE);
        }
        cursor.x += character_size + spacing;
    }
}

/// Stroke outline for a letter, in a unit cell spanning [-1, 1].
///
/// Only the letters the menu labels need. The strokes double back on
/// themselves where a pen-lift would otherwise be required, since the
/// surface contract always closes the outline.
fn glyph(c: char) -> Option<&'static [Vec2]> {
    const P: &[Vec2] = &[
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-1.0, 1.0),
    ];
    const R: &[Vec2] = &[
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-1.0, 1.0),
    ];
    const E: &[Vec2] = &[
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ];
    const S: &[Vec2] = &[
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(-1.0, 0.0),
    ];
    const A: &[Vec2] = &[
        Vec2::new(-1.0, 0.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ];
    const C: &[Vec2] = &[
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ];
    const DASH: &[Vec2] = &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];

    match c {
        'P' => Some(P),
        'R' => Some(R),
        'E' => Some(E),
        'S' => Some(S),
        'A' => Some(A),
        'C' => Some(C),
        '-' => Some(DASH),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;

    #[test]
    fn scaled_color_clamps_opacity() {
        let c = Color::rgb(200, 100, 50);
        assert_eq!(c.scaled(2.0), c);
        assert_eq!(c.scaled(-1.0), Color { r: 0, g: 0, b: 0, a: 0 });
        let half = c.scaled(0.5);
        assert_eq!(half.r, 100);
        assert_eq!(half.g, 50);
        assert_eq!(half.b, 25);
        assert_eq!(half.a, 127);
    }

    #[test]
    fn fade_surface_scales_outlines_but_not_fills() {
        let mut surface = RecordingSurface::new();
        {
            let mut fade = FadeSurface::new(&mut surface, 0.5);
            fade.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            fade.draw_polyline(&[Vec2::ZERO, Vec2::ONE], 1.0, 0.0, Vec2::ZERO, Color::WHITE);
        }
        assert_eq!(surface.fills[0].1, Color::WHITE);
        assert_eq!(surface.polylines[0].color, Color::WHITE.scaled(0.5));
    }

    #[test]
    fn text_skips_unknown_characters() {
        let mut surface = RecordingSurface::new();
        // 'X' has no glyph; only the dash and the two S glyphs land.
        draw_text(&mut surface, "SX-S", Vec2::new(150.0, 150.0), 6.0);
        assert_eq!(surface.polylines.len(), 3);
    }

    #[test]
    fn text_advances_cursor_per_character_cell() {
        let mut surface = RecordingSurface::new();
        draw_text(&mut surface, "SS", Vec2::new(100.0, 50.0), 10.0);
        let step = surface.polylines[1].position.x - surface.polylines[0].position.x;
        // Cell = 2 * scale, spacing = 5
        assert_eq!(step, 25.0);
        assert_eq!(surface.polylines[0].position.y, 50.0);
    }
}
