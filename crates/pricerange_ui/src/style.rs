//! Colors and metrics for the slider.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Visual parameters of a range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderStyle {
    /// Track background.
    pub track: Color,
    /// Highlight between the two handles.
    pub active_range: Color,
    /// Idle handle fill.
    pub handle: Color,
    /// Handle fill while dragged.
    pub handle_active: Color,
    /// Handle outline.
    pub handle_border: Color,
    /// Value text in the label row.
    pub value_text: Color,
    /// Caption text ("FROM" / "TO").
    pub caption_text: Color,
    /// Track thickness.
    pub track_height: f32,
    /// Handle diameter; also the handle hit box.
    pub handle_size: f32,
    /// Label row height (value line + caption line).
    pub label_height: f32,
    /// Gap between the label row and the track.
    pub label_gap: f32,
    /// Font size of the values.
    pub font_size: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        let accent = Color::hex(0x3B82_F6FF);
        Self {
            track: Color::hex(0xE5E7_EBFF),
            active_range: accent,
            handle: Color::WHITE,
            handle_active: Color::WHITE.lerp(accent, 0.25),
            handle_border: accent,
            value_text: Color::hex(0x1118_27FF),
            caption_text: Color::hex(0x6B72_80FF),
            track_height: 6.0,
            handle_size: 20.0,
            label_height: 36.0,
            label_gap: 12.0,
            font_size: 16.0,
        }
    }
}
