use glam::Vec2;

/// Maps simulation heights into one panel's pixel space.
///
/// Physics stays in meters with upward-positive velocity; this is the only
/// place screen coordinates (y growing downward) appear. The scale is
/// chosen so the ball fits fully inside the panel at both extremes of the
/// drop.
#[derive(Debug, Clone, Copy)]
pub struct PanelViewport {
    width: f32,
    height: f32,
    ball_radius: f32,
    scale: f32,
}

impl PanelViewport {
    pub fn new(width: f32, height: f32, ball_radius: f32, drop_height: f32) -> Self {
        let scale = (height - 2.0 * ball_radius) / drop_height;
        Self {
            width,
            height,
            ball_radius,
            scale,
        }
    }

    /// Screen-space center of the ball for a given height above ground.
    pub fn ball_center(&self, position: f32) -> Vec2 {
        Vec2::new(
            self.width * 0.5,
            self.height - self.ball_radius - position * self.scale,
        )
    }

    /// Pixel y of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.height
    }

    /// Pixels per meter.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }
}
