use crate::math;

/// A 2D vector used for positions and offsets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point `length` units away from `origin` along `degrees`.
    pub fn from_polar(origin: Vector2D, degrees: f32, length: f32) -> Self {
        let (sin, cos) = math::sin_cos(degrees * math::DEG_TO_RAD);
        origin + Vector2D::new(cos, sin) * length
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*other - *self).magnitude()
    }

    /// Bearing in degrees from `self` towards `other`.
    ///
    /// 0° points along +x and angles grow towards +y, so on a canvas with a
    /// downward y axis positive bearings turn clockwise on screen.
    pub fn bearing_to(&self, other: &Vector2D) -> f32 {
        math::atan2(other.y - self.y, other.x - self.x) * math::RAD_TO_DEG
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Fold an angular difference in degrees into `[-180, 180]`.
pub fn normalize_angle_difference(mut difference: f32) -> f32 {
    if !difference.is_finite() {
        return difference;
    }
    while difference > 180.0 {
        difference -= 360.0;
    }
    while difference < -180.0 {
        difference += 360.0;
    }
    difference
}
