use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCameraEvent {
    Disconnected,
    Connected,
}

pub trait DeviceCamera: Send + Sync {
    /// Open the device and begin streaming frames to every receiver handed
    /// out by `frames`.
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    #[allow(dead_code)]
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// Connection events. The current state is reported once on subscribe.
    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent>;
    /// Captured frames, pushed as they arrive from the device.
    fn frames(&self) -> std::sync::mpsc::Receiver<DynamicImage>;
}
