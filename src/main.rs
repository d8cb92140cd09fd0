use bubbletea_rs::Program;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use termsite::app::Site;

const LOG_FILE: &str = "termsite.log";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The terminal belongs to the alt-screen UI, so logs go to a file.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, log_config, log_file);
    }

    log::info!("starting termsite");

    let program = Program::<Site>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;

    if let Err(err) = program.run().await {
        log::error!("session ended with error: {}", err);
        return Err(err.into());
    }

    log::info!("stopping termsite");
    Ok(())
}
