pub mod pick;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::domain::bans::{BanAttribute, BanRule};
use crate::infrastructure::mars::MARS_API_URL;

#[derive(Debug, Parser)]
#[command(author, version, about = "Discover random Mars rover photos, banning attributes you never want to see", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Fetch one random unbanned photo and print it as JSON
    Pick(PickCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "ROVERPIC_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "ROVERPIC_MARS_API_URL", default_value = MARS_API_URL)]
    pub mars_api_url: String,

    #[arg(long, env = "ROVERPIC_NASA_API_KEY", default_value = "DEMO_KEY")]
    pub nasa_api_key: String,
}

#[derive(Debug, Args)]
pub struct PickCommand {
    #[arg(long, env = "ROVERPIC_MARS_API_URL", default_value = MARS_API_URL)]
    pub mars_api_url: String,

    #[arg(long, env = "ROVERPIC_NASA_API_KEY", default_value = "DEMO_KEY")]
    pub nasa_api_key: String,

    /// Exclusion in the form attribute=value; repeatable.
    /// Attributes: rover, camera, earth_date.
    #[arg(long = "ban", value_name = "ATTRIBUTE=VALUE")]
    pub bans: Vec<String>,
}

pub fn parse_ban(raw: &str) -> anyhow::Result<BanRule> {
    let Some((attribute, value)) = raw.split_once('=') else {
        anyhow::bail!("invalid ban '{raw}': expected attribute=value");
    };

    let attribute = match attribute {
        "rover" => BanAttribute::Rover,
        "camera" => BanAttribute::Camera,
        "earth_date" => BanAttribute::EarthDate,
        other => anyhow::bail!("unknown ban attribute '{other}': expected rover, camera or earth_date"),
    };

    Ok(BanRule::new(attribute, value))
}

pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
