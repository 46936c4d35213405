use std::f32::consts::PI;

/// Scene the pose is laid out in (SVG-style view box, y grows downward).
pub const SCENE_WIDTH: f32 = 800.0;
pub const SCENE_HEIGHT: f32 = 600.0;

const BASE: (f32, f32) = (150.0, 300.0);
const UPPER_ARM_LENGTH: f32 = 180.0;
const FOREARM_LENGTH: f32 = 150.0;
const TORCH_LENGTH: f32 = 50.0;

/// Joint positions of the welding robot for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    pub base: (f32, f32),
    pub elbow: (f32, f32),
    pub wrist: (f32, f32),
    pub torch_tip: (f32, f32),
    /// Joint angles in degrees.
    pub arm_angle: f32,
    pub forearm_angle: f32,
    pub torch_angle: f32,
}

impl ArmPose {
    /// Pure function of progress: one shoulder sweep and two elbow sweeps per pass.
    pub fn from_progress(progress: u8) -> Self {
        let phase = f32::from(progress) / 100.0;
        let arm_angle = -60.0 + (phase * PI * 2.0).sin() * 15.0;
        let forearm_angle = arm_angle + 90.0 + (phase * PI * 4.0).cos() * 20.0;
        let torch_angle = forearm_angle + 30.0;

        let elbow = extend(BASE, arm_angle, UPPER_ARM_LENGTH);
        let wrist = extend(elbow, forearm_angle, FOREARM_LENGTH);
        let torch_tip = extend(wrist, torch_angle, TORCH_LENGTH);

        Self {
            base: BASE,
            elbow,
            wrist,
            torch_tip,
            arm_angle,
            forearm_angle,
            torch_angle,
        }
    }
}

fn extend(from: (f32, f32), angle_deg: f32, length: f32) -> (f32, f32) {
    let radians = angle_deg.to_radians();
    (
        from.0 + radians.cos() * length,
        from.1 + radians.sin() * length,
    )
}

/// Horizontal position of the arc along the workpiece, in percent of its width.
pub fn arc_position_percent(progress: u8) -> f32 {
    f32::from(progress) * 0.8 + 10.0
}
