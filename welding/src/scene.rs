use hmicore::animation::pose::{arc_position_percent, SCENE_HEIGHT, SCENE_WIDTH};
use hmicore::animation::{AnimationState, ArmPose};
use hmicore::dashboard::welding::Message;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, LineCap, Path, Stroke},
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};

/// Snapshot of the animation handed to the canvas each frame.
#[derive(Debug, Clone)]
pub struct WeldScene {
    running: bool,
    progress: u8,
    pose: ArmPose,
    /// `(x, y, opacity)` offsets from the arc.
    sparks: Vec<(f32, f32, f32)>,
}

impl WeldScene {
    pub fn new(animation: &AnimationState) -> Self {
        Self {
            running: animation.is_running(),
            progress: animation.progress(),
            pose: ArmPose::from_progress(animation.progress()),
            sparks: animation
                .sparks()
                .iter()
                .map(|spark| (spark.x, spark.y, spark.opacity))
                .collect(),
        }
    }
}

const WORKPIECE_TOP: f32 = 0.8;
const WORKPIECE_HEIGHT: f32 = 80.0;

fn arm_color() -> Color {
    Color::from_rgb(0.58, 0.64, 0.72)
}

fn joint_color() -> Color {
    Color::from_rgb(0.28, 0.33, 0.41)
}

impl canvas::Program<Message> for WeldScene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.01, 0.02, 0.09),
        );

        if !self.running {
            frame.fill_text(canvas::Text {
                content: "Click \"Visualize\" to start welding simulation".into(),
                position: Point::new(bounds.width / 2.0 - 170.0, bounds.height / 2.0),
                color: Color::from_rgb(0.39, 0.45, 0.55),
                size: Pixels(16.0),
                ..canvas::Text::default()
            });
            return vec![frame.into_geometry()];
        }

        let sx = bounds.width / SCENE_WIDTH;
        let sy = bounds.height / SCENE_HEIGHT;
        let scale = |(x, y): (f32, f32)| Point::new(x * sx, y * sy);

        // Workpiece with the bead split at the current progress.
        let top = bounds.height * WORKPIECE_TOP - WORKPIECE_HEIGHT * sy;
        frame.fill_rectangle(
            Point::new(0.0, top),
            Size::new(bounds.width, WORKPIECE_HEIGHT * sy),
            Color::from_rgb(0.58, 0.64, 0.72),
        );
        let seam_y = top + WORKPIECE_HEIGHT * sy / 2.0;
        let split = bounds.width * f32::from(self.progress) / 100.0;
        frame.stroke(
            &Path::line(Point::new(0.0, seam_y), Point::new(split, seam_y)),
            Stroke::default()
                .with_width(8.0 * sy)
                .with_color(Color::from_rgb(1.0, 0.78, 0.44))
                .with_line_cap(LineCap::Round),
        );
        frame.stroke(
            &Path::line(Point::new(split, seam_y), Point::new(bounds.width, seam_y)),
            Stroke::default()
                .with_width(8.0 * sy)
                .with_color(Color::from_rgb(0.39, 0.45, 0.55)),
        );

        // Robot arm.
        let base = scale(self.pose.base);
        let elbow = scale(self.pose.elbow);
        let wrist = scale(self.pose.wrist);
        let tip = scale(self.pose.torch_tip);
        frame.fill_rectangle(
            Point::new(base.x - 20.0 * sx, base.y - 30.0 * sy),
            Size::new(40.0 * sx, 30.0 * sy),
            Color::from_rgb(0.2, 0.25, 0.33),
        );
        for (from, to, width, color) in [
            (base, elbow, 20.0, arm_color()),
            (elbow, wrist, 16.0, arm_color()),
            (wrist, tip, 10.0, Color::from_rgb(0.88, 0.11, 0.28)),
        ] {
            frame.stroke(
                &Path::line(from, to),
                Stroke::default()
                    .with_width(width * sx)
                    .with_color(color)
                    .with_line_cap(LineCap::Round),
            );
        }
        frame.fill(&Path::circle(elbow, 15.0 * sx), joint_color());
        frame.fill(&Path::circle(wrist, 12.0 * sx), joint_color());
        frame.fill(&Path::circle(tip, 8.0 * sx), Color::from_rgb(0.61, 0.64, 0.69));

        // Arc glow pulses with the tick parity.
        let glow = if self.progress % 2 == 0 { 30.0 } else { 40.0 };
        frame.fill(
            &Path::circle(tip, glow * sx),
            Color::from_rgba(0.98, 0.45, 0.09, 0.35),
        );
        frame.fill(&Path::circle(tip, 6.0 * sx), Color::from_rgba(1.0, 1.0, 1.0, 0.9));

        let arc = Point::new(
            bounds.width * arc_position_percent(self.progress) / 100.0,
            bounds.height * WORKPIECE_TOP,
        );
        for (dx, dy, opacity) in &self.sparks {
            frame.fill(
                &Path::circle(Point::new(arc.x + dx, arc.y + dy), 2.0),
                Color::from_rgba(0.99, 0.88, 0.28, *opacity),
            );
        }

        frame.fill_text(canvas::Text {
            content: format!("Progress: {}%", self.progress),
            position: Point::new(bounds.width / 2.0 - 50.0, bounds.height - 28.0),
            color: Color::WHITE,
            size: Pixels(14.0),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
