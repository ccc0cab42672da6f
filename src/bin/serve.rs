use std::env;

use rotorsim::components::VehicleConfig;
use rotorsim::server::ControlServer;

/// Runs the flight-control server against an external simulator: one
/// telemetry frame in, one motor frame out, per tick.
///
/// Usage: rotorsim_serve [addr] [vehicle.yaml]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let addr = args.next().unwrap_or_else(|| "127.0.0.1:5000".to_string());
    let config = match args.next() {
        Some(path) => VehicleConfig::from_yaml(path)?,
        None => VehicleConfig::phantom(),
    };

    println!("Starting control server for '{}'...", config.name);
    let server = ControlServer::bind(&addr, config)?;
    println!("PORT={}", server.local_addr()?.port());

    server.run()?;
    Ok(())
}
