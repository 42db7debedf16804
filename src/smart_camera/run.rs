use super::core::{init, transition, Effect};
use super::main::SmartCamera;

impl SmartCamera {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.spawn_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(err) => return Err(Box::new(err)),
            };

            let _ = self.logger.info(&format!(
                "Old model: {}, event: {}",
                current_model.to_display_string(),
                event.to_display_string()
            ));

            let (new_model, new_effects) = transition(current_model, event);

            let _ = self.logger.info(&format!(
                "New model: {}, effects: [{}]",
                new_model.to_display_string(),
                new_effects
                    .iter()
                    .map(|effect| effect.to_display_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));

            if let Err(err) = self.render(&new_model) {
                let _ = self.logger.error(&format!("Render failed: {}", err));
            }

            current_model = new_model;

            self.spawn_effects(new_effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                // Alert presentation stays on the run loop thread.
                Effect::ShowAlert { .. } => self.interpret_effect(effect),
                _ => {
                    let self_clone = self.clone();
                    std::thread::spawn(move || self_clone.interpret_effect(effect));
                }
            }
        }
    }
}
