use std::error::Error;
use std::process;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ctrlc;
use log::info;

use icecast_listeners::config::Config;
use icecast_listeners::logger::Logger;
use icecast_listeners::util;
use icecast_listeners::ListenerCountFetcher;

const CONFIG_FILE: &str = "./config.json";
const CTRLC_CHECK_INTERVAL_MS: u64 = 100;

//returns `true` when Ctrl-C is pressed before `d` elapses
async fn sleep_or_interrupted(d: Duration, rx: &Receiver<()>) -> bool {
    let deadline = Instant::now() + d;
    loop {
        if (rx.try_recv().is_ok()) {
            return true;
        }
        let now = Instant::now();
        if (now >= deadline) {
            return false;
        }
        tokio::time::sleep((deadline - now).min(Duration::from_millis(CTRLC_CHECK_INTERVAL_MS)))
            .await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_file = std::env::args().nth(1).unwrap_or(CONFIG_FILE.to_string());
    let config = Config::new_or_default(&util::expand_tilde(&config_file))?;

    let fetcher = ListenerCountFetcher::from_config(&config.status)?;
    let mut logger = Logger::new();

    if (!config.watch.enabled) {
        let count = fetcher.fetch_or_log().await;
        logger.log(count);
        if (count.is_none()) {
            process::exit(1);
        }
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })?;

    info!(
        "Watching {} every {}ms.",
        fetcher.url(),
        config.watch.interval_ms
    );

    loop {
        logger.log(fetcher.fetch_or_log().await);

        if (sleep_or_interrupted(Duration::from_millis(config.watch.interval_ms), &rx).await) {
            break;
        }
    }

    Ok(())
}
