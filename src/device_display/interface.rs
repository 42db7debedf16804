use image::DynamicImage;
use std::error::Error;

/// Represents the single screen shown to the user: a full-screen camera
/// preview with two text fields layered over it
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the display. Called once before the first render
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the given frame as the preview image
    fn render_preview(&mut self, frame: &DynamicImage)
        -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write the recognized object field
    fn write_recognition(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write the confidence field
    fn write_precision(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Pop up a blocking alert with the given message and an OK button
    fn show_alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
