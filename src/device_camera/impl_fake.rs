use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

#[allow(dead_code)]
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    present: bool,
    working: bool,
    frames: Vec<DynamicImage>,
}

#[allow(dead_code)]
impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            present: true,
            working: true,
            frames: vec![DynamicImage::new_rgb8(100, 100)],
        }
    }

    /// No camera attached. Subscribers hear Disconnected and nothing else.
    pub fn with_absent_device(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let mut camera = Self::new(logger);
        camera.present = false;
        camera
    }

    /// Camera is attached but refuses to start streaming.
    pub fn with_broken_input(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let mut camera = Self::new(logger);
        camera.working = false;
        camera
    }

    /// Stream the given frames in a loop instead of the default black frame.
    pub fn with_frames(logger: Arc<dyn Logger + Send + Sync>, frames: Vec<DynamicImage>) -> Self {
        let mut camera = Self::new(logger);
        camera.frames = frames;
        camera
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        std::thread::sleep(std::time::Duration::from_millis(100));

        if !self.working {
            return Err("fake camera failed to start".into());
        }

        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();

        let event = if self.present {
            DeviceCameraEvent::Connected
        } else {
            DeviceCameraEvent::Disconnected
        };

        std::thread::spawn(move || {
            let _ = tx.send(event);
        });

        rx
    }

    fn frames(&self) -> std::sync::mpsc::Receiver<DynamicImage> {
        let (tx, rx) = std::sync::mpsc::channel();
        let frames = self.frames.clone();

        std::thread::spawn(move || {
            if frames.is_empty() {
                return;
            }

            for frame in frames.iter().cycle() {
                if tx.send(frame.clone()).is_err() {
                    break;
                }
                std::thread::sleep(std::time::Duration::from_millis(50));
            }
        });

        rx
    }
}
