//! Layout for the slider: track, handles and the label row.

/// A rectangle in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of the given size centered on a point.
    #[must_use]
    pub fn centered_at(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width * 0.5, cy - height * 0.5, width, height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Main axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pack at the start.
    #[default]
    Start,
    /// First item at the start, last at the end, the rest spread evenly.
    SpaceBetween,
}

/// Arranges a run of boxes along one axis.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Layout direction.
    pub direction: Direction,
    /// Main axis alignment.
    pub alignment: Alignment,
    /// Gap between elements.
    pub gap: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            alignment: Alignment::Start,
            gap: 4.0,
        }
    }
}

impl Layout {
    /// Creates a horizontal layout.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Creates a vertical layout.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Self::default()
        }
    }

    /// Sets the gap between elements.
    #[must_use]
    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets main axis alignment.
    #[must_use]
    pub const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Lays out a list of sizes within the given bounds.
    ///
    /// Cross axis placement is always start-aligned.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn arrange(&self, bounds: Rect, sizes: &[(f32, f32)]) -> Vec<Rect> {
        if sizes.is_empty() {
            return Vec::new();
        }

        let horizontal = self.direction == Direction::Horizontal;
        let main = |(w, h): (f32, f32)| if horizontal { w } else { h };

        let available = if horizontal { bounds.width } else { bounds.height };
        let total: f32 = sizes.iter().copied().map(main).sum();
        let gaps = (sizes.len() - 1) as f32;
        let free = available - total - self.gap * gaps;

        let (start, gap) = match self.alignment {
            Alignment::Start => (0.0, self.gap),
            Alignment::SpaceBetween if sizes.len() > 1 => (0.0, self.gap + free / gaps),
            Alignment::SpaceBetween => (0.0, self.gap),
        };

        let mut offset = start;
        let mut results = Vec::with_capacity(sizes.len());
        for &(w, h) in sizes {
            let rect = if horizontal {
                Rect::new(bounds.x + offset, bounds.y, w, h)
            } else {
                Rect::new(bounds.x, bounds.y + offset, w, h)
            };
            results.push(rect);
            offset += main((w, h)) + gap;
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(110.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_centered_at() {
        let rect = Rect::centered_at(50.0, 10.0, 20.0, 20.0);
        assert_eq!(rect, Rect::new(40.0, 0.0, 20.0, 20.0));
        assert_eq!(rect.center(), (50.0, 10.0));
    }

    #[test]
    fn test_layout_horizontal() {
        let layout = Layout::horizontal().with_gap(10.0);
        let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);
        let sizes = vec![(30.0, 20.0), (40.0, 20.0), (30.0, 20.0)];

        let result = layout.arrange(bounds, &sizes);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].x, 0.0);
        assert_eq!(result[1].x, 40.0); // 30 + 10 gap
        assert_eq!(result[2].x, 90.0); // 40 + 40 + 10 gap
    }

    #[test]
    fn test_layout_space_between() {
        let layout = Layout::horizontal().with_gap(0.0).align(Alignment::SpaceBetween);
        let bounds = Rect::new(0.0, 0.0, 200.0, 20.0);

        let result = layout.arrange(bounds, &[(50.0, 20.0), (50.0, 20.0)]);

        assert_eq!(result[0].x, 0.0);
        assert_eq!(result[1].right(), 200.0);
    }

    #[test]
    fn test_layout_vertical_stack() {
        let layout = Layout::vertical().with_gap(8.0);
        let bounds = Rect::new(0.0, 0.0, 300.0, 100.0);

        let result = layout.arrange(bounds, &[(300.0, 24.0), (300.0, 20.0)]);

        assert_eq!(result[0].y, 0.0);
        assert_eq!(result[1].y, 32.0);
    }
}
