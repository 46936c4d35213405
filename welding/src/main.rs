use anyhow::Context;
use clap::Parser;
use hmicore::api::ApiClient;
use hmicore::config::DashboardConfig;
use hmicore::dashboard::welding::{Effect, Message, WeldingDashboard};
use hmicore::welding::{
    PredictionResult, SimulationResult, WeldingField, WeldingForm, WeldingMode,
};
use iced::{
    time,
    widget::{
        button, column, pick_list, row, scrollable, text, text_input, Canvas, Column, Container,
    },
    Alignment, Color, Element, Length, Subscription, Task, Theme,
};
use scene::WeldScene;
use std::path::PathBuf;
use std::time::Duration;

mod scene;

#[derive(Parser)]
#[command(author, version, about = "Robotic TIG/MIG welding dashboard")]
struct Args {
    /// Load backend locations and timeouts from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the welding backend base URL
    #[arg(long)]
    backend: Option<String>,
    /// Seed the spark generator for a reproducible visualization
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = DashboardConfig::load_or_default(args.config.as_ref())
        .context("loading dashboard config")?;
    if let Some(url) = args.backend {
        config.welding_backend = url;
    }
    let client = ApiClient::welding(&config).context("configuring welding backend")?;
    log::info!("welding backend {}", client.base_url());

    let tick = config.tick();
    let seed = args.seed;
    iced::application(
        move || WeldingApp::boot(client.clone(), tick, seed),
        WeldingApp::update,
        WeldingApp::view,
    )
    .title(application_title)
    .subscription(application_subscription)
    .theme(application_theme)
    .run()?;

    Ok(())
}

fn application_title(_: &WeldingApp) -> String {
    "Automatic TIG/MIG Welding of Stainless Steel Using Industrial Robot".into()
}

/// Progress and spark timers exist only while a pass is running; dropping them stops the ticks.
fn application_subscription(state: &WeldingApp) -> Subscription<Message> {
    if !state.dashboard.animation.is_running() {
        return Subscription::none();
    }
    let period = state.dashboard.animation.tick_period();
    Subscription::batch([
        time::every(period).map(|_| Message::ProgressTick),
        time::every(period).map(|_| Message::SparkTick),
    ])
}

fn application_theme(_: &WeldingApp) -> Theme {
    Theme::Dark
}

struct WeldingApp {
    dashboard: WeldingDashboard,
    client: ApiClient,
}

impl WeldingApp {
    fn boot(client: ApiClient, tick: Duration, seed: Option<u64>) -> (Self, Task<Message>) {
        let health = client.clone();
        let model = client.clone();
        (
            WeldingApp {
                dashboard: WeldingDashboard::new(tick, seed),
                client,
            },
            Task::batch([
                Task::perform(
                    async move { health.health().await.map_err(|e| e.to_string()) },
                    Message::HealthChecked,
                ),
                Task::perform(
                    async move { model.model_info().await.map_err(|e| e.to_string()) },
                    Message::ModelInfoLoaded,
                ),
            ]),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match state.dashboard.update(message) {
            Effect::None => Task::none(),
            Effect::Predict(params) => {
                let client = state.client.clone();
                Task::perform(
                    async move { client.predict(&params).await.map_err(|e| e.to_string()) },
                    Message::PredictFinished,
                )
            }
            Effect::Simulate(request) => {
                let client = state.client.clone();
                Task::perform(
                    async move { client.simulate(&request).await.map_err(|e| e.to_string()) },
                    Message::SimulateFinished,
                )
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let dashboard = &state.dashboard;

        let activity = text(dashboard.activity_label())
            .size(14)
            .color(if dashboard.animation.is_running() {
                Color::from_rgb(0.13, 0.77, 0.37)
            } else {
                Color::from_rgb(0.58, 0.64, 0.72)
            });

        let scene = Canvas::new(WeldScene::new(&dashboard.animation))
            .width(Length::Fill)
            .height(Length::Fixed(360.0));

        let visualize = if dashboard.animation.is_running() {
            button("Stop").on_press(Message::StopVisualization)
        } else {
            button("Visualize").on_press(Message::StartVisualization)
        };

        let controls = row![
            button(dashboard.predict_label())
                .on_press_maybe((!dashboard.loading).then_some(Message::PredictRequested))
                .padding(10),
            button(dashboard.simulate_label())
                .on_press_maybe((!dashboard.sim_loading).then_some(Message::SimulateRequested))
                .padding(10),
            visualize.padding(10),
            button("Clear").on_press(Message::Clear).padding(10),
        ]
        .spacing(12);

        let mut main_column = column![
            row![text("Welding Simulation").size(22), activity]
                .spacing(16)
                .align_y(Alignment::Center),
            scene,
            controls,
        ]
        .spacing(12);

        if let Some(banner) = dashboard.error_banner() {
            main_column = main_column.push(
                Container::new(text(banner).color(Color::from_rgb(0.99, 0.65, 0.65))).padding(10),
            );
        }
        if let Some(result) = &dashboard.result {
            main_column = main_column.push(prediction_card(result));
        }
        if let Some(result) = &dashboard.sim_result {
            main_column = main_column.push(simulation_table(result));
        }

        if let Some(summary) = dashboard.model_summary() {
            main_column = main_column.push(text(summary).size(12));
        }
        let (issued, failed) = state.client.metrics().snapshot();
        main_column = main_column.push(
            text(format!(
                "{} | requests {} / errors {}",
                dashboard.backend_status, issued, failed
            ))
            .size(12),
        );

        let layout = row![
            scrollable(main_column.padding(16)).width(Length::FillPortion(2)),
            parameters_panel(state),
        ]
        .spacing(20)
        .align_y(Alignment::Start)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn parameters_panel(state: &WeldingApp) -> Element<'_, Message> {
    let form = &state.dashboard.form;

    let process = WeldingField::PROCESS.iter().fold(
        Column::new()
            .spacing(6)
            .push(text("Welding Mode").size(13))
            .push(pick_list(
                WeldingMode::ALL,
                Some(form.mode),
                Message::ModeSelected,
            )),
        |col, field| field_input(col, form, *field),
    );
    let sweep = WeldingField::SIMULATION.iter().fold(
        Column::new()
            .spacing(6)
            .push(text("Simulation Settings").size(16)),
        |col, field| field_input(col, form, *field),
    );

    column![text("Parameters").size(22), process, sweep]
        .spacing(14)
        .padding(16)
        .width(Length::Fixed(340.0))
        .into()
}

fn field_input<'a>(
    col: Column<'a, Message>,
    form: &'a WeldingForm,
    field: WeldingField,
) -> Column<'a, Message> {
    col.push(text(field.label()).size(13)).push(
        text_input(field.label(), form.value(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .padding(6),
    )
}

fn prediction_card(result: &PredictionResult) -> Element<'_, Message> {
    let status_color = if result.defect_label {
        Color::from_rgb(0.99, 0.65, 0.65)
    } else {
        Color::from_rgb(0.53, 0.94, 0.67)
    };
    column![
        text("Prediction Results").size(20),
        row![
            text(format!("Penetration: {} mm", result.penetration_mm)).size(16),
            text(format!("Bead Width: {} mm", result.bead_width_mm)).size(16),
        ]
        .spacing(24),
        row![
            text(format!("Defect Probability: {}%", result.defect_percent())).size(16),
            text(result.status_label()).size(16).color(status_color),
        ]
        .spacing(24),
    ]
    .spacing(8)
    .padding(12)
    .into()
}

fn simulation_table(result: &SimulationResult) -> Element<'_, Message> {
    let cell = |value: String| text(value).size(12).width(Length::Fixed(110.0));
    let header = row![
        cell("Position (mm)".into()),
        cell("Travel Speed".into()),
        cell("Torch Angle".into()),
        cell("Penetration".into()),
        cell("Bead Width".into()),
        cell("Defect Prob".into()),
    ];
    let rows = result
        .simulation
        .iter()
        .fold(Column::new().spacing(4), |col, entry| {
            col.push(row![
                cell(entry.position_mm.to_string()),
                cell(entry.travel_speed.to_string()),
                cell(format!("{}°", entry.torch_angle)),
                cell(format!("{} mm", entry.penetration_mm)),
                cell(format!("{} mm", entry.bead_width_mm)),
                cell(format!("{}%", entry.defect_percent())),
            ])
        });

    column![
        text("Simulation Results").size(20),
        text(result.summary()).size(14),
        header,
        scrollable(rows).height(Length::Fixed(280.0)),
    ]
    .spacing(8)
    .padding(12)
    .into()
}
