use eframe::egui;

mod gui;
mod surface;

use vecplot::layout::{GraphBounds, ViewConfig, MARGIN, TITLE_MARGIN};
use vecplot::render::{self, render_frame};
use vecplot::state::RawFields;
use vecplot::VectorState;

use gui::Gui;
use surface::PainterSurface;

struct App {
    state: VectorState,
    gui: Gui,
}

impl App {
    pub fn default() -> Self {
        App {
            state: VectorState::new(),
            gui: Gui::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.gui.show(ctx);

        if self.gui.changed {
            self.state.set_mode(self.gui.mode);
            self.state.recompute(RawFields {
                magnitude: &self.gui.magnitude_text,
                angle: &self.gui.angle_text,
                x: &self.gui.x_text,
                y: &self.gui.y_text,
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let canvas = response.rect;
            painter.rect_filled(canvas, 0.0, surface::color(render::BACKGROUND));

            let config = ViewConfig::new(
                self.gui.scale as f64,
                canvas.width() as f64,
                canvas.height() as f64,
            );
            let bounds = GraphBounds::compute(&config, MARGIN, TITLE_MARGIN);
            let mut surface = PainterSurface::new(&painter, canvas.min);
            render_frame(&self.state, &bounds, &config, &mut surface);
        });
    }
}

fn main() {
    env_logger::init();

    let mut native_options = eframe::NativeOptions::default();
    native_options.initial_window_size = Some(egui::vec2(900., 560.));
    eframe::run_native(
        "Vector Converter",
        native_options,
        Box::new(|_| Box::new(App::default())),
    );
}
