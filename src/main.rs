use config::Config;
use device_camera::impl_v4l2::DeviceCameraV4l2;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use library::logger::impl_console::LoggerConsole;
use smart_camera::main::SmartCamera;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod library;
mod smart_camera;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraV4l2::new(config.camera.clone(), logger.clone()));

    let mut display = DeviceDisplayGui::new();
    display.init()?;
    let device_display = Arc::new(Mutex::new(display));

    let image_classifier = Arc::new(ImageClassifierTractOnnx::new(
        config.model.clone(),
        logger.clone(),
    ));

    let smart_camera = SmartCamera::new(logger, device_camera, device_display, image_classifier);

    smart_camera.run()?;

    Ok(())
}
