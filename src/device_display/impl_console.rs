use crate::device_display::interface::DeviceDisplay;
use image::DynamicImage;
use std::error::Error;

/// Terminal stand-in for the screen. The preview is not drawn; the two text
/// fields reprint whenever either of them changes.
#[allow(dead_code)]
pub struct DeviceDisplayConsole {
    recognition: String,
    precision: String,
}

impl DeviceDisplayConsole {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            recognition: String::new(),
            precision: String::new(),
        }
    }

    fn render_fields(&self) {
        println!("┌────────────────────────────────┐");
        println!("│ {:<30} │", self.recognition);
        println!("│ {:<30} │", self.precision);
        println!("└────────────────────────────────┘");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_fields();
        Ok(())
    }

    fn render_preview(
        &mut self,
        _frame: &DynamicImage,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_recognition(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.recognition == text {
            return Ok(());
        }

        self.recognition = text.to_string();
        self.render_fields();
        Ok(())
    }

    fn write_precision(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.precision == text {
            return Ok(());
        }

        self.precision = text.to_string();
        self.render_fields();
        Ok(())
    }

    fn show_alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("[ALERT] {}", message);
        Ok(())
    }
}
