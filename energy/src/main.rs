use anyhow::Context;
use charts::{GaugeDial, HourlyChart};
use clap::Parser;
use hmicore::api::ApiClient;
use hmicore::config::DashboardConfig;
use hmicore::dashboard::energy::{Effect, EnergyDashboard, Message, SystemStatus};
use hmicore::energy::EnergyField;
use hmicore::math::RoundingHelper;
use iced::{
    widget::{button, column, row, slider, text, Canvas, Column, Container, Row},
    Alignment, Color, Element, Length, Task, Theme,
};
use std::path::PathBuf;

mod charts;

#[derive(Parser)]
#[command(author, version, about = "AI-powered energy optimization HMI")]
struct Args {
    /// Load backend locations and timeouts from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the optimizer backend base URL
    #[arg(long)]
    backend: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = DashboardConfig::load_or_default(args.config.as_ref())
        .context("loading dashboard config")?;
    if let Some(url) = args.backend {
        config.energy_backend = url;
    }
    let client = ApiClient::energy(&config).context("configuring optimizer backend")?;
    log::info!("optimizer backend {}", client.base_url());

    iced::application(
        move || EnergyApp::boot(client.clone()),
        EnergyApp::update,
        EnergyApp::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()?;

    Ok(())
}

fn application_title(state: &EnergyApp) -> String {
    format!("Energy Optimization System [{}]", state.dashboard.status)
}

fn application_theme(_: &EnergyApp) -> Theme {
    Theme::Dark
}

struct EnergyApp {
    dashboard: EnergyDashboard,
    client: ApiClient,
}

impl EnergyApp {
    fn boot(client: ApiClient) -> (Self, Task<Message>) {
        (
            EnergyApp {
                dashboard: EnergyDashboard::default(),
                client,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match state.dashboard.update(message) {
            Effect::None => Task::none(),
            Effect::Optimize { request, hours } => {
                let client = state.client.clone();
                Task::perform(
                    async move {
                        client
                            .optimize_energy(&request)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |outcome| Message::OptimizeFinished { hours, outcome },
                )
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let dashboard = &state.dashboard;

        let header = row![
            column![
                text("ENERGY OPTIMIZATION SYSTEM").size(24),
                text("AI-Powered HMI Control Interface v2.1").size(12),
            ]
            .spacing(4)
            .width(Length::Fill),
            text(dashboard.status.to_string())
                .size(16)
                .color(status_color(dashboard.status)),
        ]
        .align_y(Alignment::Center)
        .padding(12);

        let sensors = EnergyField::ALL.iter().fold(
            Column::new()
                .spacing(10)
                .push(text("ENVIRONMENTAL SENSORS").size(18)),
            |col, field| {
                let field = *field;
                let range = field.range();
                let value = dashboard.inputs.value(field);
                col.push(
                    row![
                        text(field.label()).size(13).width(Length::Fill),
                        text(format!("{}{}", value, field.unit())).size(13),
                    ]
                    .spacing(8),
                )
                .push(
                    slider(range.clone(), value, move |v| {
                        Message::InputChanged(field, v)
                    })
                    .step(1.0),
                )
                .push(
                    row![
                        text(range.start().to_string()).size(10).width(Length::Fill),
                        text(range.end().to_string()).size(10),
                    ],
                )
            },
        );

        let optimize_label = if dashboard.loading {
            "PROCESSING..."
        } else {
            "OPTIMIZE ENERGY"
        };
        let left_panel = column![
            sensors,
            button(optimize_label)
                .on_press_maybe((!dashboard.loading).then_some(Message::OptimizeRequested))
                .padding(12)
                .width(Length::Fill),
        ]
        .spacing(16)
        .padding(16)
        .width(Length::Fixed(340.0));

        let mut results = Column::new().spacing(12).padding(16).width(Length::Fill);
        if let Some(banner) = dashboard.error_banner() {
            results = results.push(text(banner).color(Color::from_rgb(0.97, 0.44, 0.44)));
        }
        match (dashboard.optimized_energy, dashboard.total_consumption()) {
            (Some(rate), Some(total)) => {
                results = results
                    .push(text("OPTIMIZATION RESULTS").size(18))
                    .push(
                        row![
                            column![
                                text("OPTIMIZED RATE").size(11),
                                text(format!("{} kWh/hour", RoundingHelper::to_fixed(rate, 2)))
                                    .size(26),
                            ]
                            .width(Length::Fill),
                            column![
                                text("TOTAL CONSUMPTION").size(11),
                                text(format!("{total} kWh")).size(26),
                                text(format!("DURATION: {} HOURS", dashboard.inputs.hours))
                                    .size(11),
                            ]
                            .width(Length::Fill),
                        ]
                        .spacing(16),
                    )
                    .push(text("TARGET FUNCTION").size(11))
                    .push(text(dashboard.target_function.clone()).size(13));
            }
            _ => {
                results = results.push(
                    text("Awaiting optimization. Adjust the sensors and press OPTIMIZE ENERGY.")
                        .size(14),
                );
            }
        }

        results = results.push(text("HOURLY ENERGY TREND").size(16)).push(
            Canvas::new(HourlyChart::new(&dashboard.hourly))
                .width(Length::Fill)
                .height(Length::Fixed(240.0)),
        );

        let [temp, humidity, wind] = dashboard.gauges();
        let readings = [
            format!("{}°C", dashboard.inputs.temperature),
            format!("{}%", dashboard.inputs.humidity),
            format!("{} km/h", dashboard.inputs.wind_speed),
        ];
        let dials = [temp, humidity, wind].into_iter().zip(readings).fold(
            Row::new().spacing(12),
            |dials, (gauge, reading)| {
                dials.push(
                    Canvas::new(GaugeDial::new(gauge, reading))
                        .width(Length::Fill)
                        .height(Length::Fixed(120.0)),
                )
            },
        );
        results = results.push(text("LIVE SENSOR GAUGES").size(16)).push(dials);

        let (issued, failed) = state.client.metrics().snapshot();
        results = results.push(text(format!("requests {issued} / errors {failed}")).size(11));

        let layout = column![header, row![left_panel, results].spacing(20)]
            .spacing(8)
            .padding(16);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn status_color(status: SystemStatus) -> Color {
    match status {
        SystemStatus::Ready => Color::from_rgb(0.38, 0.65, 0.98),
        SystemStatus::Processing => Color::from_rgb(0.98, 0.8, 0.08),
        SystemStatus::Optimized => Color::from_rgb(0.29, 0.87, 0.5),
        SystemStatus::Error => Color::from_rgb(0.97, 0.44, 0.44),
    }
}
