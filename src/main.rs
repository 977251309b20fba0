use checkout_address::utils::logger;
use checkout_address::{localize_for_country, Address, AddressView, CliConfig};
use clap::Parser;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting checkout-address CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let raw = match &config.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let payload: serde_json::Value = serde_json::from_str(&raw)?;
    let mut address = Address::from_response(&payload)?;
    if let Some(country) = &config.country {
        address.set_country_code(country);
    }

    let response_data = payload.as_object().cloned().unwrap_or_default();
    let localized = localize_for_country(address, response_data);

    let name = format!("{} {}", localized.first_name(), localized.last_name());
    let name = name.trim();
    if !name.is_empty() {
        println!("{}", name);
    }
    if let Some(company) = localized.company() {
        println!("{}", company);
    }
    for line in localized.lines() {
        println!("{}", line);
    }
    println!("{} {}", localized.post_code(), localized.city());
    println!("{}", localized.country_code());

    Ok(())
}
