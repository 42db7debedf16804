use super::interface::{Classification, ImageClassifier};
use super::models::model_config::ModelConfig;
use super::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::{Arc, RwLock};
use tract_onnx::prelude::*;

struct LoadedModel {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
}

/// ONNX classifier backed by tract. The model is loaded once and only read
/// afterwards, so classification never takes the write lock.
pub struct ImageClassifierTractOnnx {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    model: RwLock<Option<LoadedModel>>,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_classifier"),
            model: RwLock::new(None),
        }
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Loading model from {}",
            self.config.onnx_model_path
        ))?;

        let (height, width) = self.config.input_shape;
        let plan = tract_onnx::onnx()
            .model_for_path(&self.config.onnx_model_path)?
            .with_input_fact(
                0,
                f32::fact([1, 3, height as usize, width as usize]).into(),
            )?
            .into_optimized()?
            .into_runnable()?;

        let labels = load_labels(&self.config.labels_path)?;

        self.logger
            .info(&format!("Model loaded with {} labels", labels.len()))?;

        *self.model.write().unwrap() = Some(LoadedModel { plan, labels });

        Ok(())
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let guard = self.model.read().unwrap();
        let loaded = guard.as_ref().ok_or("classification model is not loaded")?;

        let (height, width) = self.config.input_shape;
        let tensor = resize_image_to_tensor(image, width, height);

        let result = loaded.plan.run(tvec!(tensor.into_tvalue()))?;
        let scores: Vec<f32> = result[0].to_array_view::<f32>()?.iter().copied().collect();
        let probabilities = softmax(&scores);

        let classifications: Vec<Classification> = probabilities
            .iter()
            .enumerate()
            .map(|(index, confidence)| Classification {
                label: loaded
                    .labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("class {}", index)),
                confidence: *confidence,
            })
            .collect();

        Ok(rank(classifications, self.config.top_k))
    }
}

/// Rank candidates by descending confidence and keep the best `top_k`. The
/// ordering is total, so NaN scores from a misbehaving model cannot panic
/// the sort.
fn rank(mut classifications: Vec<Classification>, top_k: usize) -> Vec<Classification> {
    classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    classifications.truncate(top_k);
    classifications
}

/// Turn raw logits into probabilities. Shifts by the max score first so the
/// exponentials cannot overflow.
fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|score| (score - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 {
        return exps;
    }
    exps.iter().map(|exp| exp / sum).collect()
}

fn load_labels(path: &str) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)?;
    let labels: Vec<String> = contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    if labels.is_empty() {
        return Err(format!("no labels found in {}", path).into());
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(label: &str, confidence: f32) -> Classification {
        Classification {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_rank_orders_by_descending_confidence() {
        let ranked = rank(
            vec![
                classification("junco", 0.1),
                classification("tabby", 0.7),
                classification("beagle", 0.2),
            ],
            2,
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "tabby");
        assert_eq!(ranked[1].label, "beagle");
    }

    #[test]
    fn test_rank_survives_nan_scores() {
        let ranked = rank(
            vec![
                classification("junco", f32::NAN),
                classification("tabby", 0.7),
            ],
            5,
        );

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().any(|candidate| candidate.label == "tabby"));
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probabilities = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_softmax_preserves_order() {
        let probabilities = softmax(&[0.5, 3.0, 1.0]);
        assert!(probabilities[1] > probabilities[2]);
        assert!(probabilities[2] > probabilities[0]);
    }

    #[test]
    fn test_softmax_handles_large_scores() {
        let probabilities = softmax(&[1000.0, 1001.0]);
        assert!(probabilities.iter().all(|p| p.is_finite()));
        assert!(probabilities[1] > probabilities[0]);
    }

    #[test]
    fn test_softmax_empty_input() {
        assert!(softmax(&[]).is_empty());
    }
}
