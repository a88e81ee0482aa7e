/// Arena geometry: axis-aligned boxes and projectile velocities.
///
/// Coordinates are arena units (the arena is 640×480), `y` grows downward.

/// Which way a projectile travels along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn from_midtop(cx: f32, top: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, top, w, h)
    }

    pub fn from_midbottom(cx: f32, bottom: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, bottom - h, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict AABB overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside `self` (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Move the box back inside `bounds`. A box larger than the bounds on
    /// some axis is centred on that axis instead.
    pub fn clamp_within(&self, bounds: &Rect) -> Rect {
        let x = if self.w >= bounds.w {
            bounds.center_x() - self.w / 2.0
        } else {
            self.x.clamp(bounds.left(), bounds.right() - self.w)
        };
        let y = if self.h >= bounds.h {
            bounds.center_y() - self.h / 2.0
        } else {
            self.y.clamp(bounds.top(), bounds.bottom() - self.h)
        };
        Rect { x, y, ..*self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Velocity {
    /// Decompose `speed` along an angle measured in degrees from the vertical.
    /// Positive angles lean right regardless of heading.
    pub fn from_angle(speed: f32, degrees: f32, heading: Heading) -> Self {
        let radians = degrees.to_radians();
        let vertical = speed * radians.cos();
        Self {
            dx: speed * radians.sin(),
            dy: match heading {
                Heading::Up => -vertical,
                Heading::Down => vertical,
            },
        }
    }
}
