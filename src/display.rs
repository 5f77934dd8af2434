use crate::config::DisplayConfig;
use crate::error::{FoodyError, Result};
use log::debug;
use std::process::Command;
use std::time::Duration;

/// Settings fixed at startup and handed to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub page_size: usize,
    /// Pause after a first/last page notice so it can be read
    pub notice_pause: Duration,
    pub image_width: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: 5,
            notice_pause: Duration::from_secs(2),
            image_width: 40,
        }
    }
}

impl TryFrom<&DisplayConfig> for DisplaySettings {
    type Error = FoodyError;

    fn try_from(config: &DisplayConfig) -> Result<Self> {
        if config.page_size == 0 {
            return Err(FoodyError::Configuration(
                "display: page size must be positive".to_string(),
            ));
        }

        Ok(DisplaySettings {
            page_size: config.page_size,
            notice_pause: Duration::from_millis(config.notice_pause_ms),
            image_width: config.image_width,
        })
    }
}

/// Turns an image URL into printable text
pub trait ImageRenderer {
    fn render(&self, image_url: &str) -> Result<String>;
}

/// Renders JPEGs as ASCII art with the external `jp2a` tool
pub struct Jp2aRenderer {
    width: u32,
}

impl Jp2aRenderer {
    pub fn new(width: u32) -> Self {
        Self { width }
    }
}

impl ImageRenderer for Jp2aRenderer {
    fn render(&self, image_url: &str) -> Result<String> {
        debug!("running jp2a on {}", image_url);

        let output = Command::new("jp2a")
            .arg(format!("--width={}", self.width))
            .arg(image_url)
            .output()
            .map_err(|e| FoodyError::Render(format!("error running jp2a command, {}", e)))?;

        if !output.status.success() {
            return Err(FoodyError::Render(format!(
                "jp2a exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
