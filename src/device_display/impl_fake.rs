use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Preview,
    Recognition(String),
    Precision(String),
    Alert(String),
}

#[allow(dead_code)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for reading back what was drawn after the display has been
    /// moved behind its mutex.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<DisplayCall>>> {
        self.calls.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn render_preview(
        &mut self,
        _frame: &DynamicImage,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::render_preview()")?;
        self.calls.lock().unwrap().push(DisplayCall::Preview);
        Ok(())
    }

    fn write_recognition(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::write_recognition({})", text))?;
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Recognition(text.to_string()));
        Ok(())
    }

    fn write_precision(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::write_precision({})", text))?;
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Precision(text.to_string()));
        Ok(())
    }

    fn show_alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show_alert({})", message))?;
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Alert(message.to_string()));
        Ok(())
    }
}
