use image::DynamicImage;

#[derive(Debug, Clone)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Load the bundled model. Called once at startup; classification stays
    /// disabled for the whole session if this fails.
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Classify one frame, returning candidate labels ordered by descending
    /// confidence. Confidence is a probability in [0, 1].
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
