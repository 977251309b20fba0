use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "checkout-address")]
#[command(about = "Formats checkout address payloads for German postal conventions")]
pub struct CliConfig {
    #[arg(long, help = "Checkout response payload file (JSON); reads stdin when omitted")]
    pub input: Option<String>,

    #[arg(long, help = "Override the payload's country code")]
    pub country: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
