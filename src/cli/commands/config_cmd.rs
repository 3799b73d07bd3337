//! Config command - show or change the verification service endpoint

use credgate::config::{GlobalConfig, Mode};

/// Show the current mode, or update the configured endpoint
pub fn run(endpoint: Option<String>, clear: bool) -> anyhow::Result<()> {
    anyhow::ensure!(
        !(clear && endpoint.is_some()),
        "--clear and --endpoint are mutually exclusive"
    );

    if clear || endpoint.is_some() {
        let mut config = GlobalConfig::load();
        config.endpoint = if clear { None } else { endpoint };
        config.save()?;
    }

    let config = GlobalConfig::load();
    match Mode::resolve(&config) {
        Mode::Demo => println!("demo mode (no endpoint configured; verdicts are synthesized)"),
        Mode::Backend { endpoint } => println!("backend mode: {endpoint}"),
    }
    Ok(())
}
