use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::Device;
use v4l::FourCC;

#[derive(Debug, Clone, PartialEq)]
pub struct V4l2CameraConfig {
    pub device_path: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for V4l2CameraConfig {
    fn default() -> Self {
        Self {
            device_path: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

/// Webcam capture through Video4Linux. Frames are decoded on a capture thread
/// and fanned out to every subscribed receiver.
pub struct DeviceCameraV4l2 {
    config: V4l2CameraConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_senders: Arc<Mutex<Vec<std::sync::mpsc::Sender<DynamicImage>>>>,
    stop_requested: Arc<AtomicBool>,
}

impl DeviceCameraV4l2 {
    pub fn new(config: V4l2CameraConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("camera").with_namespace("v4l2"),
            frame_senders: Arc::new(Mutex::new(Vec::new())),
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl DeviceCamera for DeviceCameraV4l2 {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.stop_requested.store(false, Ordering::SeqCst);

        let device = Device::with_path(&self.config.device_path)?;

        let mut fmt = device.format()?;
        fmt.width = self.config.width;
        fmt.height = self.config.height;
        fmt.fourcc = FourCC::new(b"MJPG");
        let mut fmt = device.set_format(&fmt)?;

        if fmt.fourcc != FourCC::new(b"MJPG") {
            fmt.fourcc = FourCC::new(b"YUYV");
            fmt = device.set_format(&fmt)?;
        }

        if fmt.fourcc != FourCC::new(b"MJPG") && fmt.fourcc != FourCC::new(b"YUYV") {
            return Err(format!("unsupported camera format {}", fmt.fourcc).into());
        }

        // Some drivers reject interval changes and stream at their own rate.
        let mut params = device.params()?;
        params.interval.numerator = 1;
        params.interval.denominator = self.config.fps;
        let _ = device.set_params(&params);

        // The stream borrows the device, so leak the device to get a
        // 'static stream the capture thread can own.
        let device: &'static Device = Box::leak(Box::new(device));
        let mut stream = Stream::with_buffers(device, v4l::buffer::Type::VideoCapture, 4)?;

        self.logger.info(&format!(
            "Camera started: {}x{} [{}]",
            fmt.width, fmt.height, fmt.fourcc
        ))?;

        let senders = self.frame_senders.clone();
        let stop_requested = self.stop_requested.clone();
        let logger = self.logger.clone();
        let fourcc = fmt.fourcc;
        let (width, height) = (fmt.width, fmt.height);

        std::thread::spawn(move || {
            while !stop_requested.load(Ordering::SeqCst) {
                let (data, _meta) = match stream.next() {
                    Ok(frame) => frame,
                    Err(err) => {
                        let _ = logger.error(&format!("Frame capture failed: {}", err));
                        break;
                    }
                };

                let frame = match decode_frame(data, fourcc, width, height) {
                    Ok(frame) => frame,
                    Err(_) => continue,
                };

                let mut senders = senders.lock().unwrap();
                senders.retain(|sender| sender.send(frame.clone()).is_ok());
            }
        });

        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.stop_requested.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let device_path = self.config.device_path.clone();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let event = match Device::with_path(&device_path) {
                Ok(_) => DeviceCameraEvent::Connected,
                Err(_) => DeviceCameraEvent::Disconnected,
            };

            let _ = logger.info(&format!("Camera probe: {:?}", event));
            let _ = tx.send(event);
        });

        rx
    }

    fn frames(&self) -> std::sync::mpsc::Receiver<DynamicImage> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.frame_senders.lock().unwrap().push(tx);
        rx
    }
}

fn decode_frame(
    data: &[u8],
    fourcc: FourCC,
    width: u32,
    height: u32,
) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
    match fourcc.str() {
        Ok("MJPG") => Ok(image::load_from_memory_with_format(
            data,
            ImageFormat::Jpeg,
        )?),
        Ok("YUYV") => Ok(DynamicImage::ImageRgb8(yuyv_to_rgb(data, width, height))),
        _ => Err("unsupported camera format".into()),
    }
}

/// YUV 4:2:2 to RGB with the BT.601 coefficients. Four bytes encode two
/// pixels that share one chroma pair: [Y0, U, Y1, V].
fn yuyv_to_rgb(yuyv: &[u8], width: u32, height: u32) -> RgbImage {
    let mut rgb = RgbImage::new(width, height);

    for (index, chunk) in yuyv.chunks_exact(4).enumerate() {
        let u = chunk[1] as f32 - 128.0;
        let v = chunk[3] as f32 - 128.0;

        let x = (index as u32 * 2) % width;
        let y = (index as u32 * 2) / width;
        if y >= height {
            break;
        }

        for (offset, &luma) in [chunk[0], chunk[2]].iter().enumerate() {
            if x + offset as u32 >= width {
                continue;
            }

            let luma = luma as f32;
            let r = (luma + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (luma - 0.344136 * u - 0.714136 * v).clamp(0.0, 255.0) as u8;
            let b = (luma + 1.772 * u).clamp(0.0, 255.0) as u8;

            rgb.put_pixel(x + offset as u32, y, image::Rgb([r, g, b]));
        }
    }

    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuyv_to_rgb_grey() {
        // Y=128 with neutral chroma decodes to mid grey.
        let yuyv = vec![128, 128, 128, 128];
        let rgb = yuyv_to_rgb(&yuyv, 2, 1);

        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([128, 128, 128]));
        assert_eq!(rgb.get_pixel(1, 0), &image::Rgb([128, 128, 128]));
    }

    #[test]
    fn test_yuyv_to_rgb_red_chroma() {
        // Max V pushes red up and green down.
        let yuyv = vec![128, 128, 128, 255];
        let rgb = yuyv_to_rgb(&yuyv, 2, 1);

        let pixel = rgb.get_pixel(0, 0);
        assert_eq!(pixel[0], 255);
        assert!(pixel[1] < 128);
        assert_eq!(pixel[2], 128);
    }

    #[test]
    fn test_yuyv_to_rgb_ignores_trailing_bytes() {
        let yuyv = vec![128, 128, 128, 128, 0, 0, 0];
        let rgb = yuyv_to_rgb(&yuyv, 2, 1);

        assert_eq!(rgb.width(), 2);
        assert_eq!(rgb.height(), 1);
    }
}
