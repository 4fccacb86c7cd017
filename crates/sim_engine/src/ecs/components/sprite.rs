//! Sprite component consumed by the render stage

/// Shape drawn for a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Filled circle
    Circle,

    /// Axis-aligned square
    Rect,

    /// Upward-pointing triangle
    Triangle,
}

/// RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,

    /// Green channel
    pub g: f32,

    /// Blue channel
    pub b: f32,

    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// White, fully opaque
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    /// Create a color from all four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Copy of this color with a different alpha
    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

/// Sprite: a colored shape of a given size
///
/// The particle stage rewrites the alpha channel of particle sprites as they
/// age; everything else treats the sprite as read-only draw data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Shape to draw
    pub shape: Shape,

    /// Nominal size in playfield units (radius or half-extent)
    pub size: f32,

    /// Fill color
    pub color: Color,
}

impl Sprite {
    /// Create a sprite
    pub fn new(shape: Shape, size: f32, color: Color) -> Self {
        Self { shape, size, color }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Shape::Circle, 10.0, Color::WHITE)
    }
}
