use serde::{Deserialize, Serialize};

use crate::asset::Frame;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const SHADE: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 140,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: u32,
    pub color: Color,
    pub align: TextAlign,
}

/// Screen-space drawing surface. Coordinates are pixels from the top-left
/// of the viewport; the caller has already applied the camera offset.
pub trait Renderer {
    fn draw_frame(&mut self, frame: &Frame, screen_x: i32, screen_y: i32);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle);

    /// Flip the finished frame to the display.
    fn present(&mut self);
}
