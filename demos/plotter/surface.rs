use eframe::egui::{self, Align2, Color32, FontId, Pos2};

use vecplot::render::{Anchor, Rgba, Stroke, Surface};

pub fn color(rgba: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Adapts an egui painter to the renderer's surface. All incoming
/// coordinates are relative to the canvas, so they are offset by its
/// top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    offset: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, offset: Pos2) -> Self {
        PainterSurface { painter, offset }
    }

    fn pos(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(self.offset.x + x as f32, self.offset.y + y as f32)
    }
}

impl Surface for PainterSurface<'_> {
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        self.painter.line_segment(
            [self.pos(x1, y1), self.pos(x2, y2)],
            egui::Stroke::new(stroke.width as f32, color(stroke.color)),
        );
    }

    fn rect(
        &mut self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    ) {
        let rect = egui::Rect::from_min_size(
            self.pos(left, top),
            egui::vec2(width as f32, height as f32),
        );
        if let Some(fill) = fill {
            self.painter.rect_filled(rect, 0.0, color(fill));
        }
        if let Some(stroke) = stroke {
            self.painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(stroke.width as f32, color(stroke.color)),
            );
        }
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        rgba: Rgba,
        anchor: Anchor,
        content: core::fmt::Arguments<'_>,
    ) {
        let align = match anchor {
            Anchor::LeftTop => Align2::LEFT_TOP,
            Anchor::LeftCenter => Align2::LEFT_CENTER,
            Anchor::CenterTop => Align2::CENTER_TOP,
        };
        self.painter.text(
            self.pos(x, y),
            align,
            content,
            FontId::proportional(size as f32),
            color(rgba),
        );
    }
}
