use super::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    fixed: Option<Vec<Classification>>,
    broken_model: bool,
    classify_calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            fixed: None,
            broken_model: false,
            classify_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Always answer with the given classifications instead of random ones.
    pub fn with_classifications(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        let mut classifier = Self::new(logger);
        classifier.fixed = Some(classifications);
        classifier
    }

    /// Fail at load time, as a missing or corrupt model file would.
    pub fn with_broken_model(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let mut classifier = Self::new(logger);
        classifier.broken_model = true;
        classifier
    }

    pub fn classify_calls(&self) -> usize {
        *self.classify_calls.lock().unwrap()
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Loading fake model")?;

        if self.broken_model {
            return Err("fake model failed to load".into());
        }

        Ok(())
    }

    fn classify(
        &self,
        _image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        *self.classify_calls.lock().unwrap() += 1;

        self.logger.info("Classifying image with fake classifier")?;

        if let Some(classifications) = &self.fixed {
            return Ok(classifications.clone());
        }

        let objects = vec![
            "tabby cat", "golden retriever", "great dane", "coffee mug", "laptop", "bicycle",
            "park bench", "street sign", "backpack", "wall clock", "desk lamp", "running shoe",
        ];

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, objects.len())?;

        let confidence_dist = Uniform::new(0.0, 1.0)?;

        let classification = Classification {
            label: objects[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };

        Ok(vec![classification])
    }
}
