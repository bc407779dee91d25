use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use parcel::{ParcelLimits, WriteFlags};
use tracing::info;

use wx_alerts::{decode_parcel, encode_parcel, Error, WxAlertHeadlines, PARCEL_ENCODING};

#[derive(Debug, Parser)]
#[command(name = "wx-alerts-parcel")]
#[command(about = "Convert alert headline JSON to base64 parcels and back")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a headline feed (JSON) and print it as a base64 parcel
    Encode {
        /// JSON file, or "-" for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Opaque write flags passed through to the records
        #[arg(long, default_value_t = 0)]
        flags: u32,

        /// Override the header source key
        #[arg(long)]
        source_key: Option<String>,

        /// Override the header valid time (epoch millis)
        #[arg(long)]
        valid_ms: Option<i64>,

        /// Override the header expire time (epoch millis)
        #[arg(long)]
        expire_ms: Option<i64>,
    },

    /// Read a base64 parcel and print the headlines as JSON
    Decode {
        /// Base64 parcel text, or "-" for stdin
        #[arg(long, default_value = "-")]
        parcel: String,

        /// Encoding tag carried alongside the content
        #[arg(long)]
        enc: Option<String>,

        /// Print alerts in severity order instead of stored order
        #[arg(long)]
        sorted: bool,
    },
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let limits = ParcelLimits::from_env();

    match args.command {
        Command::Encode {
            input,
            flags,
            source_key,
            valid_ms,
            expire_ms,
        } => {
            let body = read_input(&input)?;
            let mut headlines = WxAlertHeadlines::from_json(&body)?;
            if let Some(key) = source_key {
                headlines.header.source_key = Some(key);
            }
            if let Some(ms) = valid_ms {
                headlines.header.valid_time_ms = ms;
            }
            if let Some(ms) = expire_ms {
                headlines.header.expire_time_ms = ms;
            }

            let (content, tag) = encode_parcel(&headlines, WriteFlags::from_bits(flags), limits)?;
            info!(alerts = headlines.len(), encoding = tag, "Encoded headlines");
            println!("{content}");
        }
        Command::Decode {
            parcel,
            enc,
            sorted,
        } => {
            let content = if parcel == "-" {
                read_input(Path::new("-"))?
            } else {
                parcel
            };

            let mut headlines: WxAlertHeadlines =
                decode_parcel(&content, enc.as_deref(), limits)?;
            info!(
                alerts = headlines.len(),
                encoding = enc.as_deref().unwrap_or(PARCEL_ENCODING),
                "Decoded headlines"
            );
            if sorted {
                headlines.alerts = headlines.sorted_alerts();
            }
            println!("{}", serde_json::to_string_pretty(&headlines)?);
        }
    }

    Ok(())
}
