use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::car::Telemetry;
use crate::track::Track;

/// Configuration the viewers are allowed to write back.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub surface: String,
    pub gravity: f32, // units/s^2, slider range 0..30
}

pub struct SharedSimState {
    pub tick: u64,
    pub clients: Vec<UnboundedSender<String>>,
    pub config: SimConfig,
    /// Static track geometry JSON, built once and sent with every welcome.
    pub track_geometry: String,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    tick: u64,
    telemetry: &'a Telemetry,
}

impl SharedSimState {
    pub fn new(track_geometry: String) -> Self {
        Self {
            tick: 0,
            clients: Vec::new(),
            config: SimConfig {
                surface: "Asphalt".to_string(),
                gravity: 9.81,
            },
            track_geometry,
        }
    }

    pub fn register_client(&mut self, tx: UnboundedSender<String>) {
        self.clients.push(tx);
    }

    /// Send the current telemetry snapshot to all connected viewers; clients
    /// whose channel closed are dropped.
    pub fn broadcast_snapshot(&mut self, telemetry: &Telemetry) {
        let json = serde_json::to_string(&Snapshot {
            kind: "telemetry",
            tick: self.tick,
            telemetry,
        })
        .unwrap();

        self.clients.retain(|tx| tx.send(json.clone()).is_ok());
    }
}

/// Serialize the immutable track geometry for the welcome message: center
/// polyline, road boundary rings and the zone count the views need for
/// surface shading.
pub fn track_geometry_json(track: &Track) -> String {
    fn pts(v: &[nalgebra::Point2<f32>]) -> Vec<[f32; 2]> {
        v.iter().map(|p| [p.x, p.y]).collect()
    }

    serde_json::json!({
        "polyline": pts(&track.polyline),
        "outer": pts(&track.road.outer),
        "inner": pts(&track.road.inner),
        "polygon": pts(&track.road.polygon),
        "zones": track.zones,
    })
    .to_string()
}
