use crate::device_camera::impl_v4l2::V4l2CameraConfig;
use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub camera: V4l2CameraConfig,
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: V4l2CameraConfig::default(),
            model: ModelConfig {
                onnx_model_path: "./src/image_classifier/models/mobilenetv2-7.onnx".to_string(),
                labels_path: "./src/image_classifier/models/imagenet_classes.txt".to_string(),
                input_shape: (224, 224),
                top_k: 5,
            },
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
