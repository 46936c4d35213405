use hmicore::dashboard::energy::Message;
use hmicore::energy::{Gauge, GaugeLevel, HourlySample};
use iced::{
    mouse,
    widget::canvas::{self, path::Arc, Frame, Geometry, LineCap, Path, Stroke},
    Color, Pixels, Point, Radians, Rectangle, Renderer, Theme,
};
use std::f32::consts::PI;

fn level_color(level: GaugeLevel) -> Color {
    match level {
        GaugeLevel::Normal => Color::from_rgb(0.13, 0.77, 0.37),
        GaugeLevel::Elevated => Color::from_rgb(0.92, 0.7, 0.03),
        GaugeLevel::Critical => Color::from_rgb(0.94, 0.27, 0.27),
    }
}

/// Area chart of the hourly consumption series.
#[derive(Debug, Clone)]
pub struct HourlyChart {
    samples: Vec<HourlySample>,
}

impl HourlyChart {
    pub fn new(samples: &[HourlySample]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl canvas::Program<Message> for HourlyChart {
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
            Color::from_rgb(0.06, 0.09, 0.16),
        );

        if self.samples.is_empty() {
            frame.fill_text(canvas::Text {
                content: "Run optimization to populate the hourly trend".into(),
                position: Point::new(16.0, bounds.height / 2.0),
                color: Color::from_rgb(0.39, 0.45, 0.55),
                size: Pixels(14.0),
                ..canvas::Text::default()
            });
            return vec![frame.into_geometry()];
        }

        let margin = 24.0;
        let width = bounds.width - 2.0 * margin;
        let height = bounds.height - 2.0 * margin;
        let max = self
            .samples
            .iter()
            .map(|sample| sample.energy as f32)
            .fold(0.0, f32::max)
            .max(1.0);
        let step = if self.samples.len() > 1 {
            width / (self.samples.len() as f32 - 1.0)
        } else {
            width
        };
        let point_at = |index: usize, energy: f64| {
            let x = margin + index as f32 * step;
            let y = margin + height - (energy as f32 / max) * height * 0.9;
            Point::new(x, y)
        };

        // A single hour is drawn as a flat segment across the chart.
        let points: Vec<Point> = if self.samples.len() == 1 {
            let y = point_at(0, self.samples[0].energy).y;
            vec![Point::new(margin, y), Point::new(margin + width, y)]
        } else {
            self.samples
                .iter()
                .enumerate()
                .map(|(i, sample)| point_at(i, sample.energy))
                .collect()
        };

        let baseline = margin + height;
        let area = Path::new(|builder| {
            builder.move_to(Point::new(points[0].x, baseline));
            for point in &points {
                builder.line_to(*point);
            }
            builder.line_to(Point::new(points[points.len() - 1].x, baseline));
            builder.close();
        });
        frame.fill(&area, Color::from_rgba(0.02, 0.71, 0.83, 0.3));

        let line = Path::new(|builder| {
            builder.move_to(points[0]);
            for point in &points[1..] {
                builder.line_to(*point);
            }
        });
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(2.5)
                .with_color(Color::from_rgb(0.02, 0.71, 0.83)),
        );

        for (i, sample) in self.samples.iter().enumerate() {
            let x = if self.samples.len() == 1 {
                margin + width / 2.0
            } else {
                point_at(i, sample.energy).x
            };
            frame.fill_text(canvas::Text {
                content: sample.name.clone(),
                position: Point::new(x - 8.0, baseline + 6.0),
                color: Color::from_rgb(0.58, 0.64, 0.72),
                size: Pixels(11.0),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Half-circle dial for one sensor reading.
#[derive(Debug, Clone)]
pub struct GaugeDial {
    gauge: Gauge,
    reading: String,
}

impl GaugeDial {
    pub fn new(gauge: Gauge, reading: String) -> Self {
        Self { gauge, reading }
    }
}

impl canvas::Program<Message> for GaugeDial {
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
        let center = Point::new(bounds.width / 2.0, bounds.height * 0.75);
        let radius = (bounds.width / 2.0).min(bounds.height * 0.7) - 8.0;

        let dial = |fraction: f32| {
            Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(PI),
                    end_angle: Radians(PI + PI * fraction),
                })
            })
        };

        frame.stroke(
            &dial(1.0),
            Stroke::default()
                .with_width(10.0)
                .with_color(Color::from_rgb(0.12, 0.16, 0.23)),
        );
        if self.gauge.fraction() > 0.0 {
            frame.stroke(
                &dial(self.gauge.fraction()),
                Stroke::default()
                    .with_width(10.0)
                    .with_color(level_color(self.gauge.level))
                    .with_line_cap(LineCap::Round),
            );
        }

        frame.fill_text(canvas::Text {
            content: self.reading.clone(),
            position: Point::new(center.x - 20.0, center.y - 12.0),
            color: Color::WHITE,
            size: Pixels(14.0),
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: self.gauge.name.to_uppercase(),
            position: Point::new(center.x - 20.0, center.y + 8.0),
            color: Color::from_rgb(0.58, 0.64, 0.72),
            size: Pixels(11.0),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
