use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use image::DynamicImage;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct ScreenState {
    /// Raw RGB bytes of the latest frame plus its [width, height].
    preview: Option<(Vec<u8>, [usize; 2])>,
    preview_dirty: bool,
    recognition: String,
    precision: String,
    alerts: Vec<String>,
}

struct DisplayWindow {
    state: Arc<Mutex<ScreenState>>,
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut state = self.state.lock().unwrap();

        if state.preview_dirty {
            if let Some((pixels, size)) = &state.preview {
                let image = egui::ColorImage::from_rgb(*size, pixels);
                self.texture =
                    Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
            }
            state.preview_dirty = false;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.painter().image(
                        texture.id(),
                        ui.max_rect(),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }

                // The two text fields sit at the bottom, over the preview.
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new(&state.precision)
                            .color(egui::Color32::WHITE)
                            .size(24.0),
                    );
                    ui.label(
                        egui::RichText::new(&state.recognition)
                            .color(egui::Color32::WHITE)
                            .size(24.0),
                    );
                });
            });

        if let Some(message) = state.alerts.first().cloned() {
            egui::Window::new("Error occured")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&message);
                    if ui.button("OK").clicked() {
                        state.alerts.remove(0);
                    }
                });
        }

        ctx.request_repaint();
    }
}

pub struct DeviceDisplayGui {
    state: Arc<Mutex<ScreenState>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ScreenState::default())),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let state = self.state.clone();

        // The window runs on its own thread so init can return
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([640.0, 520.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = DisplayWindow {
                state,
                texture: None,
            };

            // Blocks this thread until the window is closed
            let _ = eframe::run_native("Smart Camera", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn render_preview(&mut self, frame: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>> {
        let rgb = frame.to_rgb8();
        let size = [rgb.width() as usize, rgb.height() as usize];

        let mut state = self.state.lock().unwrap();
        state.preview = Some((rgb.into_raw(), size));
        state.preview_dirty = true;
        Ok(())
    }

    fn write_recognition(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().recognition = text.to_string();
        Ok(())
    }

    fn write_precision(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().precision = text.to_string();
        Ok(())
    }

    fn show_alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().alerts.push(message.to_string());
        Ok(())
    }
}
