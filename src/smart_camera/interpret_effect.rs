use super::main::SmartCamera;
use crate::smart_camera::core::{Effect, Event};

impl SmartCamera {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeCamera => {
                let events = self.device_camera.events();
                while let Ok(event) = events.recv() {
                    if self.event_sender.send(Event::CameraEvent(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::SubscribeFrames => {
                let frames = self.device_camera.frames();
                while let Ok(frame) = frames.recv() {
                    if self.event_sender.send(Event::FrameCaptured(frame)).is_err() {
                        break;
                    }
                }
            }
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = self.event_sender.send(Event::CameraStartDone(started));
            }
            Effect::LoadModel => {
                let loaded = self.image_classifier.load();
                let _ = self.event_sender.send(Event::ModelLoadDone(loaded));
            }
            Effect::ClassifyFrame { frame } => {
                let classifications = self.image_classifier.classify(&frame);
                let _ = self
                    .event_sender
                    .send(Event::FrameClassifyDone(classifications));
            }
            Effect::ShowAlert { message } => {
                let shown = self.device_display.lock().unwrap().show_alert(&message);
                if let Err(err) = shown {
                    let _ = self.logger.error(&format!("Alert failed: {}", err));
                }
            }
        }
    }
}
