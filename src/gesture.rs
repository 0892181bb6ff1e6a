/// Cumulative pan translation since the gesture began, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn horizontal(dx: f64) -> Self {
        Self { dx, dy: 0.0 }
    }

    pub fn is_vertical(&self) -> bool {
        self.dy.abs() > self.dx.abs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    Began,
    Changed(Translation),
    Ended,
    Cancelled,
}
