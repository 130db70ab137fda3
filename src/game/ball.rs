use super::geometry::Rect;

/// Playfield extent the ball resets within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    base_speed: i32,
    dir_x: i32,
    dir_y: i32,
    momentum: i32,
    max_momentum: i32,
    hits_per_momentum: u32,
    hit_count: u32,
    field: Field,
}

impl Ball {
    /// New ball at the center of `field`, heading right and down.
    pub fn new(
        base_speed: i32,
        size: i32,
        max_momentum: i32,
        hits_per_momentum: u32,
        field: Field,
    ) -> Self {
        let mut ball = Self {
            rect: Rect::new(0, 0, size, size),
            base_speed,
            dir_x: 1,
            dir_y: 1,
            momentum: 0,
            max_momentum,
            hits_per_momentum,
            hit_count: 0,
            field,
        };
        ball.center();
        ball
    }

    pub fn direction(&self) -> (i32, i32) {
        (self.dir_x, self.dir_y)
    }

    pub fn momentum(&self) -> i32 {
        self.momentum
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Distance covered on each axis per tick
    pub fn speed(&self) -> i32 {
        self.base_speed + self.momentum
    }

    pub fn change_direction_x(&mut self) {
        self.dir_x = -self.dir_x;
    }

    pub fn change_direction_y(&mut self) {
        self.dir_y = -self.dir_y;
    }

    pub fn hit(&mut self) {
        self.hit_count += 1;
    }

    /// Gain one point of momentum on every `hits_per_momentum`-th hit, up to
    /// the cap. Must run after `hit()` so the new count is checked.
    pub fn increase_momentum(&mut self) -> bool {
        if self.momentum < self.max_momentum
            && self.hits_per_momentum != 0
            && self.hit_count % self.hits_per_momentum == 0
        {
            self.momentum += 1;
            return true;
        }
        false
    }

    /// Back to center with momentum cleared. Direction and hit count carry over.
    pub fn reset(&mut self) {
        self.center();
        self.momentum = 0;
    }

    /// Move one tick; returns true if the ball crossed a side and was reset.
    pub fn advance(&mut self) -> bool {
        let speed = self.speed();
        self.rect.x += self.dir_x * speed;
        self.rect.y += self.dir_y * speed;

        if self.rect.x <= 0 || self.rect.x >= self.field.width - self.rect.w {
            self.reset();
            return true;
        }
        false
    }

    pub fn collides(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    fn center(&mut self) {
        self.rect.x = (self.field.width - self.rect.w) / 2;
        self.rect.y = (self.field.height - self.rect.h) / 2;
    }
}
