use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;

/// Directory where the log file will be stored.
fn get_data_dir() -> Option<PathBuf> {

    let mut data_dir = dirs::data_dir()?;
    data_dir.push("yt2next");
    create_dir_all(data_dir.clone()).ok()?;
    Some(data_dir)
}

pub fn get_log_path() -> Option<PathBuf> {

    match env::var("LOG_PATH") {
        Ok(var) => Some(PathBuf::from(var)),
        Err(_) => {
            let mut data_dir = get_data_dir()?;
            data_dir.push("log.txt");
            Some(data_dir)
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {

    let mut config_dir = dirs::config_dir()?;
    config_dir.push("yt2next/yt2next.config");
    Some(config_dir)
}
