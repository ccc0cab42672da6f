use serde::{Deserialize, Serialize};

/// Enum representing commands sent to the control server.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// One telemetry frame for this tick; the server answers with the
    /// motor values for the same tick.
    Frame { telemetry: Vec<f64> },
    /// Close the connection.
    Close,
}

/// Motor values returned for one telemetry frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Per-motor normalized commands in [0, 1].
    pub motors: Vec<f64>,
}
