#![forbid(unsafe_code)]

//! Rectangle geometry for screen regions.

/// A rectangular region in terminal cells, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region has zero area.
    ///
    /// Every screen checks this before rendering; an absent region means
    /// the widget is silently inactive.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// A single row inside this rect, `dy` rows below the top.
    ///
    /// Returns an empty rect when `dy` is out of range.
    #[must_use]
    pub const fn row(self, dy: u16) -> Self {
        if dy >= self.height {
            return Self::new(self.x, self.y, 0, 0);
        }
        Self::new(self.x, self.y + dy, self.width, 1)
    }

    /// Shrink the rect by `margin` cells on every side.
    #[must_use]
    pub const fn inset(self, margin: u16) -> Self {
        let double = margin.saturating_mul(2);
        if self.width <= double || self.height <= double {
            return Self::new(self.x, self.y, 0, 0);
        }
        Self::new(
            self.x + margin,
            self.y + margin,
            self.width - double,
            self.height - double,
        )
    }

    /// Split off `rows` from the top; returns `(top, rest)`.
    #[must_use]
    pub const fn split_top(self, rows: u16) -> (Self, Self) {
        let taken = if rows > self.height { self.height } else { rows };
        (
            Self::new(self.x, self.y, self.width, taken),
            Self::new(
                self.x,
                self.y + taken,
                self.width,
                self.height - taken,
            ),
        )
    }

    /// Split off `rows` from the bottom; returns `(rest, bottom)`.
    #[must_use]
    pub const fn split_bottom(self, rows: u16) -> (Self, Self) {
        let taken = if rows > self.height { self.height } else { rows };
        (
            Self::new(self.x, self.y, self.width, self.height - taken),
            Self::new(
                self.x,
                self.y + self.height - taken,
                self.width,
                taken,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_detection() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn row_bounds() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.row(0), Rect::new(2, 3, 10, 1));
        assert_eq!(r.row(3), Rect::new(2, 6, 10, 1));
        assert!(r.row(4).is_empty());
    }

    #[test]
    fn splits_are_exhaustive() {
        let r = Rect::new(0, 0, 80, 24);
        let (top, rest) = r.split_top(1);
        assert_eq!(top.height + rest.height, 24);
        let (body, bottom) = rest.split_bottom(2);
        assert_eq!(body.height + bottom.height, rest.height);
        assert_eq!(bottom.y, 22);
    }

    #[test]
    fn oversized_split_clamps() {
        let r = Rect::new(0, 0, 10, 3);
        let (top, rest) = r.split_top(9);
        assert_eq!(top.height, 3);
        assert!(rest.is_empty());
    }

    #[test]
    fn inset_collapses_small_rects() {
        assert!(Rect::new(0, 0, 2, 2).inset(1).is_empty());
        assert_eq!(Rect::new(0, 0, 10, 10).inset(1), Rect::new(1, 1, 8, 8));
    }
}
