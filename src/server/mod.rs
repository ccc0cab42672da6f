mod structures;
mod telemetry;

pub use structures::{Command, Response};
pub use telemetry::{
    demands_from_telemetry, frame_time, frame_time_us, is_halt, state_from_telemetry,
    telemetry_from_rigid_body, telemetry_from_state, TELEMETRY_LEN,
};

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use thiserror::Error;

use crate::components::{ConfigError, VehicleConfig};
use crate::systems::{mix, PidPipeline, THROTTLE_RESET_THRESHOLD};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed command: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// TCP control server: the flight-control side of the system run against
/// an external simulator or vehicle. Each connection is one session; per
/// tick the peer sends a telemetry frame and receives the mixed motor
/// values. The whole loop is synchronous and single-threaded, one atomic
/// tick per frame.
pub struct ControlServer {
    listener: TcpListener,
    config: VehicleConfig,
}

impl ControlServer {
    /// Binds the server, validating the vehicle configuration first.
    pub fn bind(addr: &str, config: VehicleConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> Result<std::net::SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, one session at a time.
    pub fn run(&self) -> Result<(), ServerError> {
        loop {
            let (stream, addr) = self.listener.accept()?;
            println!("Client connected: {}", addr);
            match self.serve_connection(stream) {
                Ok(()) => println!("Client disconnected: {}", addr),
                Err(e) => eprintln!("Session ended with error: {}", e),
            }
        }
    }

    /// Runs the control loop for one connection until the peer closes,
    /// sends `Close`, or the telemetry halt sentinel arrives. Controller
    /// state lives for the session; a new connection starts clean.
    pub fn serve_connection(&self, stream: TcpStream) -> Result<(), ServerError> {
        let mut pipeline = PidPipeline::from_gains(&self.config.gains);
        let mut writer = stream.try_clone()?;
        let reader = BufReader::new(stream);

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command: Command = serde_json::from_str(&line)?;
            let telemetry = match command {
                Command::Frame { telemetry } => telemetry,
                Command::Close => break,
            };

            if telemetry.len() < TELEMETRY_LEN {
                eprintln!(
                    "Short telemetry frame ({} of {} values), halting session",
                    telemetry.len(),
                    TELEMETRY_LEN
                );
                break;
            }

            // Sim sends a negative time value on halt.
            if is_halt(&telemetry) {
                break;
            }

            let motors = self.tick(&mut pipeline, &telemetry);

            let response = serde_json::to_string(&Response { motors })?;
            writer.write_all(response.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        Ok(())
    }

    /// One control tick: telemetry to state and demands, explicit
    /// body-frame rotation, PID pipeline, mixer.
    fn tick(&self, pipeline: &mut PidPipeline, telemetry: &[f64]) -> Vec<f64> {
        let state = state_from_telemetry(telemetry).to_body_velocity();
        let demands = demands_from_telemetry(telemetry);

        let reset = demands.throttle < THROTTLE_RESET_THRESHOLD;
        let corrected = pipeline.run(demands, &state, frame_time_us(telemetry), reset);

        mix(&corrected, &self.config.layout)
    }
}
