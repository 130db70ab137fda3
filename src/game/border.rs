use super::geometry::Rect;

/// Static horizontal bar; only ever used as a collision boundary.
#[derive(Debug, Clone)]
pub struct Border {
    rect: Rect,
}

impl Border {
    /// Bar spanning the field width minus `padding` on each side, at `y`.
    pub fn new(field_width: i32, padding: i32, thickness: i32, y: i32) -> Self {
        let w = field_width - 2 * padding;
        Self {
            rect: Rect::new((field_width - w) / 2, y, w, thickness),
        }
    }

    pub fn top(field_width: i32, padding: i32, thickness: i32) -> Self {
        Self::new(field_width, padding, thickness, padding)
    }

    pub fn bottom(field_width: i32, field_height: i32, padding: i32, thickness: i32) -> Self {
        Self::new(field_width, padding, thickness, field_height - padding - thickness)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}
