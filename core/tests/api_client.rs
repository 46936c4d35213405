use hmicore::api::ApiClient;
use hmicore::dashboard::welding::{Message, WeldingDashboard};
use hmicore::energy::EnergyInputs;
use hmicore::prelude::{ClientError, Endpoint};
use hmicore::welding::{WeldingMode, WeldingParameters};
use serde_json::{json, Value};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use warp::{http::StatusCode, Filter, Rejection};

macro_rules! spawn_backend {
    ($routes:expr) => {{
        let (addr, server) = warp::serve($routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }};
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&format!("http://{addr}")).unwrap()
}

fn sample_params() -> WeldingParameters {
    WeldingParameters {
        mode: WeldingMode::Tig,
        current: 150.0,
        voltage: 24.0,
        wire_feed_speed: 5.0,
        travel_speed: 6.0,
        torch_angle: 10.0,
        gas_flow_rate: 15.0,
        material_thickness: 3.0,
    }
}

fn prediction_for(current: f64) -> Value {
    json!({
        "input": {"current": current},
        "penetration_mm": current / 100.0,
        "bead_width_mm": 2.5,
        "defect_probability": 0.125,
        "defect_label": 0
    })
}

#[tokio::test]
async fn predict_posts_exactly_the_form_fields() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let route = warp::path("predict")
        .and(warp::post())
        .and(warp::header::exact("content-type", "application/json"))
        .and(warp::body::json())
        .map(move |body: Value| {
            recorder.lock().unwrap().push(body.clone());
            let current = body["current"].as_f64().unwrap_or_default();
            warp::reply::json(&prediction_for(current))
        });
    let addr = spawn_backend!(route);

    let result = client_for(addr).predict(&sample_params()).await.unwrap();

    assert_eq!(result.penetration_mm, 1.5);
    assert!(!result.defect_label);
    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "mode": 0,
            "current": 150.0,
            "voltage": 24.0,
            "wire_feed_speed": 5.0,
            "travel_speed": 6.0,
            "torch_angle": 10.0,
            "gas_flow_rate": 15.0,
            "material_thickness": 3.0
        })
    );
}

#[tokio::test]
async fn simulate_returns_rows_in_order() {
    let route = warp::path("simulate")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: Value| {
            let segments = body["segments"].as_f64().unwrap_or_default() as u64;
            let length = body["length_mm"].as_f64().unwrap_or_default();
            let rows: Vec<Value> = (0..segments)
                .map(|i| {
                    let frac = i as f64 / (segments.max(2) - 1) as f64;
                    json!({
                        "position_mm": frac * length,
                        "travel_speed": 6.0,
                        "torch_angle": 5.0,
                        "penetration_mm": 1.0,
                        "bead_width_mm": 2.0,
                        "defect_probability": 0.5
                    })
                })
                .collect();
            warp::reply::json(&json!({
                "simulation": rows,
                "segments": segments,
                "length_mm": length
            }))
        });
    let addr = spawn_backend!(route);

    let mut dashboard = WeldingDashboard::default();
    let request = match dashboard.update(Message::SimulateRequested) {
        hmicore::dashboard::welding::Effect::Simulate(request) => request,
        other => panic!("unexpected effect {other:?}"),
    };
    let result = client_for(addr).simulate(&request).await.unwrap();

    assert_eq!(result.segments, 10);
    assert_eq!(result.summary(), "10 segments over 100 mm");
    let positions: Vec<f64> = result.simulation.iter().map(|r| r.position_mm).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(positions.last(), Some(&100.0));
}

#[tokio::test]
async fn optimize_energy_omits_hours() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let route = warp::path("optimize_energy")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: Value| {
            recorder.lock().unwrap().push(body);
            warp::reply::json(&json!({
                "optimized_energy": 2.5,
                "target_function": "f(x)=..."
            }))
        });
    let addr = spawn_backend!(route);

    let inputs = EnergyInputs {
        temperature: 25.0,
        humidity: 40.0,
        wind_speed: 5.0,
        solar_radiation: 200.0,
        occupancy: 10.0,
        hours: 3.0,
    };
    let (request, _) = inputs.split();
    let result = client_for(addr).optimize_energy(&request).await.unwrap();

    assert_eq!(result.optimized_energy, 2.5);
    let bodies = seen.lock().unwrap();
    let object = bodies[0].as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert!(!object.contains_key("hours"));
}

#[tokio::test]
async fn slow_backend_hits_timeout() {
    let route = warp::path("predict").and(warp::post()).and_then(|| async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok::<_, Rejection>(warp::reply::json(&prediction_for(1.0)))
    });
    let addr = spawn_backend!(route);
    let client = client_for(addr).with_timeout(Endpoint::Predict, Some(Duration::from_millis(50)));

    let err = client.predict(&sample_params()).await.unwrap_err();

    assert_eq!(err, ClientError::Timeout { after_ms: 50 });
    assert_eq!(err.to_string(), "timeout of 50ms exceeded");
    assert_eq!(client.metrics().counts(Endpoint::Predict).failed, 1);
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let route = warp::path("predict").and(warp::post()).map(|| {
        warp::reply::with_status(
            warp::reply::json(&json!({"error": "could not convert string to float", "trace": "..."})),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let addr = spawn_backend!(route);

    let err = client_for(addr).predict(&sample_params()).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            code: 500,
            message: Some("could not convert string to float".into())
        }
    );
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let route = warp::path("predict")
        .and(warp::post())
        .map(|| warp::reply::html("<h1>maintenance</h1>"));
    let addr = spawn_backend!(route);

    let err = client_for(addr).predict(&sample_params()).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn closed_port_is_a_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let err = client_for(addr).predict(&sample_params()).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.to_string().starts_with("Network Error"));
}

#[tokio::test]
async fn health_probe_reads_status() {
    let route = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&json!({"status": "ok", "note": "Flask ML simulation server running"}))
    });
    let addr = spawn_backend!(route);

    let health = client_for(addr).health().await.unwrap();

    assert!(health.is_ok());
    assert_eq!(health.note, "Flask ML simulation server running");
}

#[tokio::test]
async fn model_info_lists_features() {
    let route = warp::path("model_info").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "features": ["mode", "current"],
            "models": {"penetration": "RandomForestRegressor (n_estimators=200)"},
            "note": "synthetic"
        }))
    });
    let addr = spawn_backend!(route);

    let info = client_for(addr).model_info().await.unwrap();

    assert_eq!(info.features, vec!["mode".to_string(), "current".to_string()]);
    assert_eq!(info.models.len(), 1);
}

#[tokio::test]
async fn overlapping_predictions_apply_in_completion_order() {
    // The first request is answered slowly, the second quickly.
    let route = warp::path("predict")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(|body: Value| async move {
            let current = body["current"].as_f64().unwrap_or_default();
            let delay = if current < 100.0 { 300 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok::<_, Rejection>(warp::reply::json(&prediction_for(current)))
        });
    let addr = spawn_backend!(route);
    let client = client_for(addr);

    let (tx, mut rx) = mpsc::unbounded_channel();
    for current in [50.0, 200.0] {
        let client = client.clone();
        let tx = tx.clone();
        let params = WeldingParameters {
            current,
            ..sample_params()
        };
        tokio::spawn(async move {
            let outcome = client.predict(&params).await.map_err(|e| e.to_string());
            let _ = tx.send(outcome);
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    drop(tx);

    let mut dashboard = WeldingDashboard::default();
    let mut order = Vec::new();
    while let Some(outcome) = rx.recv().await {
        order.push(outcome.as_ref().map(|r| r.penetration_mm).unwrap_or_default());
        dashboard.update(Message::PredictFinished(outcome));
    }

    assert_eq!(order, vec![2.0, 0.5]);
    assert_eq!(dashboard.result.unwrap().penetration_mm, 0.5);
    assert_eq!(client.metrics().counts(Endpoint::Predict).issued, 2);
}
