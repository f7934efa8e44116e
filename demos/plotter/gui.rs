use eframe::egui::{Context, SidePanel, Slider};

use vecplot::state::Field;
use vecplot::InputMode;

/// The input form: mode selector, the raw value fields, and the scale
/// slider. Raw text stays here; the library parses it on recompute.
pub struct Gui {
    pub mode: InputMode,
    pub magnitude_text: String,
    pub angle_text: String,
    pub x_text: String,
    pub y_text: String,
    pub scale: i32,
    /// Did any input change this frame?
    pub changed: bool,
}

impl Gui {
    pub fn new() -> Self {
        Gui {
            mode: InputMode::Polar,
            magnitude_text: "5".into(),
            angle_text: "30".into(),
            x_text: "4".into(),
            y_text: "3".into(),
            scale: 40,
            changed: false,
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        let mut changed = false;
        SidePanel::left("inputs").show(ctx, |ui| {
            ui.heading("Input Type");
            changed |= ui
                .radio_value(&mut self.mode, InputMode::Polar, "Polar")
                .changed();
            changed |= ui
                .radio_value(&mut self.mode, InputMode::Cartesian, "Cartesian")
                .changed();

            ui.separator();
            // Only the fields of the active mode are shown
            for field in self.mode.active_fields() {
                let (label, text) = match field {
                    Field::Magnitude => ("Magnitude r", &mut self.magnitude_text),
                    Field::Angle => ("Angle θ (deg)", &mut self.angle_text),
                    Field::X => ("x", &mut self.x_text),
                    Field::Y => ("y", &mut self.y_text),
                };
                ui.horizontal(|ui| {
                    changed |= ui.text_edit_singleline(text).changed();
                    ui.label(label);
                });
            }

            ui.separator();
            ui.label("Scale (px/unit)");
            changed |= ui.add(Slider::new(&mut self.scale, 10..=120)).changed();
        });
        self.changed = changed;
    }
}
