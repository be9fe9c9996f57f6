//! Whole-cube viewing angles. Purely cosmetic; never touches cubie state.

/// Step applied by each view rotation, in radians.
pub const VIEW_STEP: f32 = 0.5;

/// Tilt of the whole cube around the screen's x and y axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            rotation_x: VIEW_STEP,
            rotation_y: VIEW_STEP,
        }
    }
}

impl ViewAngles {
    pub fn rotate_left(&mut self) {
        self.rotation_y -= VIEW_STEP;
    }

    pub fn rotate_right(&mut self) {
        self.rotation_y += VIEW_STEP;
    }

    pub fn rotate_up(&mut self) {
        self.rotation_x -= VIEW_STEP;
    }

    pub fn rotate_down(&mut self) {
        self.rotation_x += VIEW_STEP;
    }
}
