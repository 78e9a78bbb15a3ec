mod utils;

use std::env;
use std::fs::File;

use anyhow::bail;
use argh::FromArgs;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use yt2next_lib::api::ApiProgressCallback;
use yt2next_lib::models::Resolution;
use yt2next_lib::resolver::{self, Settings};

#[derive(FromArgs)]
/// Finds the video a channel uploaded right after the linked one.
struct Yt2nextArgs {

    /// link to the video you just watched.
    #[argh(positional)]
    pub url: String,

    /// youtube data api key. Defaults to the YT_API_KEY variable.
    #[argh(option)]
    pub key: Option<String>,

    /// print progress while the uploads playlist is fetched.
    #[argh(switch, short = 'v')]
    pub verbose: bool
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    let args: Yt2nextArgs = argh::from_env();

    // Parse the config file. If it fails, env vars and flags are used instead.
    if let Some(config_path) = utils::get_config_path() {
        let _ = dotenvy::from_path(config_path);
    }

    if let Some(log_path) = utils::get_log_path() {
        if let Ok(file) = File::create(&log_path) {
            let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
        }
    }

    let api_key = args.key
        .or_else(|| env::var("YT_API_KEY").ok())
        .unwrap_or_default();

    let mut settings = Settings::new(api_key);
    if let Ok(base_url) = env::var("YT_API_URL") {
        settings.api_base_url = Some(base_url);
    }

    let callback: Option<ApiProgressCallback> = if args.verbose {
        Some(Box::new(|progress| eprintln!("{progress}")))
    } else { None };

    match resolver::resolve_next_with(&args.url, &settings, callback).await {
        Ok(resolution) => print_resolution(&resolution),
        Err(e) => {
            log::error!("{e}");
            bail!("{e}");
        }
    }

    Ok(())
}

fn print_resolution(resolution: &Resolution) {

    let current = &resolution.current;
    println!("Current video: {}", current.title);
    println!("               {}", current.watch_url());

    match &resolution.next {
        Some(next) => {
            println!("Next video:    {}", next.title);
            println!("               {}", next.watch_url());
            println!("Published:     {}", next.published_at);
        },
        None => println!("This is the latest video from {}, nothing newer yet.", current.channel_title)
    }
}
