use super::core::Model;
use super::main::SmartCamera;

impl SmartCamera {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        if let Some(frame) = &model.preview {
            device_display.render_preview(frame)?;
        }

        // Both fields stay empty until the first classification lands, and
        // keep the last result afterwards.
        if let Some(recognition) = &model.recognition {
            device_display.write_recognition(&format_recognition(&recognition.label))?;
            device_display.write_precision(&format_precision(recognition.confidence))?;
        }

        Ok(())
    }
}

/// Uppercase the first letter of every word and lowercase the rest. Any
/// non-alphanumeric character separates words, so hyphenated labels like
/// "jack-o'-lantern" capitalize every part.
pub fn format_recognition(label: &str) -> String {
    let mut formatted = String::with_capacity(label.len());
    let mut at_word_start = true;

    for c in label.chars() {
        if !c.is_alphanumeric() {
            at_word_start = true;
            formatted.push(c);
        } else if at_word_start {
            formatted.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            formatted.extend(c.to_lowercase());
        }
    }

    formatted
}

/// Confidence scaled to a percentage with exactly two decimals.
pub fn format_precision(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}
