#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    pub labels_path: String,
    /// Model input size as (height, width).
    pub input_shape: (u32, u32),
    /// How many ranked candidates to keep per frame.
    pub top_k: usize,
}
