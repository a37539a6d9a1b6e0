use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;
use std::str::FromStr;

pub fn init(level: &str) -> Result<()> {
    let parsed = Level::from_str(level).ok();
    init_with_level(parsed.unwrap_or(Level::Info))?;

    if parsed.is_none() {
        log::warn!("Unknown log level '{}', using info", level);
    }

    Ok(())
}
