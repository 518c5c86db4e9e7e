use crate::util::coord::Position;
use glam::{DMat4, DQuat, DVec3};
use std::fmt;

/// Rotation as an axis and an angle in radians. The axis need not be unit
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAngle {
    pub axis: DVec3,
    pub angle: f64,
}

impl AxisAngle {
    /// `"0 0 0 0"`: no axis, no rotation.
    pub const NULL: AxisAngle = AxisAngle {
        axis: DVec3::ZERO,
        angle: 0.0,
    };

    pub fn new(axis: DVec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// A zero axis or zero angle is the identity.
    pub fn to_quat(&self) -> DQuat {
        let axis = self.axis.normalize_or_zero();
        if axis == DVec3::ZERO || self.angle == 0.0 {
            return DQuat::IDENTITY;
        }
        DQuat::from_axis_angle(axis, self.angle)
    }
}

/// Position plus orientation, as the host engine stores object transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: DVec3,
    pub orientation: AxisAngle,
}

impl Transform {
    pub fn position(&self) -> Position {
        self.position.into()
    }

    /// Rotation then translation, column major.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.orientation.to_quat(), self.position)
    }
}

/// `"x y z ax ay az angle"`
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = self.orientation.axis;
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.position.x,
            self.position.y,
            self.position.z,
            axis.x,
            axis.y,
            axis.z,
            self.orientation.angle
        )
    }
}

/// A transform at `(x, y, z)` with the null orientation.
pub fn create_position_transform(x: f64, y: f64, z: f64) -> Transform {
    Transform {
        position: DVec3::new(x, y, z),
        orientation: AxisAngle::NULL,
    }
}
