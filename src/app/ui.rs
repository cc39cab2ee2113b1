use super::view::{Intent, Landing, ResultCard, View, RESET_BUTTON, UPLOAD_BUTTON};
use crate::utils::color::Palette;
use eframe::egui::{self, Align2, Color32, FontId, Id, LayerId, Order, Rect, RichText, Sense, Vec2};
use std::f64::consts::{PI, TAU};

const GLYPH_SIZE: f32 = 112.0;
const PROGRESS_HEIGHT: f32 = 4.0;

/// Paints one frame of `view`. Returns the intent the user triggered, if any.
pub fn paint(ctx: &egui::Context, view: &View, palette: &Palette) -> Option<Intent> {
    let time = ctx.input(|i| i.time);
    let busy = matches!(view, View::Landing(Landing { progress: Some(_), .. }));
    let fill = ctx.animate_bool_with_time(Id::new("progress_fill"), busy, 1.0);
    let result_shown = ctx.animate_bool_with_time(
        Id::new("result_fade"),
        matches!(view, View::Result(_)),
        0.5,
    );

    let mut intent = None;
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(palette.background)
                .inner_margin(24.0),
        )
        .show(ctx, |ui| {
            paint_ambient_glows(ui, palette, time);
            intent = match view {
                View::Landing(landing) => paint_landing(ui, landing, palette, time, 1.0 - result_shown),
                View::Result(card) => paint_result(ui, card, palette, time, result_shown),
            };
        });

    if busy {
        paint_progress_strip(ctx, palette, fill);
    }

    intent
}

fn paint_ambient_glows(ui: &egui::Ui, palette: &Palette, time: f64) {
    let rect = ui.max_rect();
    let radius = rect.height().min(rect.width()) * 0.45;
    let painter = ui.painter();

    let left = 1.0 + 0.10 * wave(time, 8.0, 0.0);
    let right = 1.0 + 0.15 * wave(time, 9.0, 0.0);
    painter.circle_filled(rect.left_top(), radius * left, palette.glow_left);
    painter.circle_filled(rect.right_bottom(), radius * right, palette.glow_right);
}

fn paint_progress_strip(ctx: &egui::Context, palette: &Palette, fill: f32) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("progress_strip")));
    let track = Rect::from_min_size(screen.min, Vec2::new(screen.width(), PROGRESS_HEIGHT));
    let bar = Rect::from_min_size(screen.min, Vec2::new(screen.width() * fill, PROGRESS_HEIGHT));
    painter.rect_filled(track, 0.0, Color32::from_white_alpha(25));
    painter.rect_filled(bar, 0.0, palette.progress);
}

fn paint_landing(
    ui: &mut egui::Ui,
    landing: &Landing,
    palette: &Palette,
    time: f64,
    opacity: f32,
) -> Option<Intent> {
    let mut intent = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.12);

        let card = egui::Frame::none()
            .fill(palette.card)
            .rounding(24.0)
            .inner_margin(egui::Margin::symmetric(16.0, 40.0))
            .show(ui, |ui| {
                ui.columns(2, |columns| {
                    for (i, (column, glyph)) in
                        columns.iter_mut().zip(landing.glyphs.iter()).enumerate()
                    {
                        // The two glyphs sway in opposite directions.
                        let bob = 6.0 * wave(time, 5.0, i as f64 * PI);
                        column.vertical_centered(|ui| {
                            ui.add_space(8.0 + bob);
                            ui.label(
                                RichText::new(*glyph)
                                    .size(GLYPH_SIZE)
                                    .color(palette.text.gamma_multiply(opacity)),
                            );
                            ui.add_space(8.0 - bob);
                        });
                    }
                });
            })
            .response
            .rect;

        let pulse = 1.0 + 0.15 * wave(time, 2.0, 0.0).abs();
        ui.painter().text(
            card.center(),
            Align2::CENTER_CENTER,
            "VS",
            FontId::proportional(44.0 * pulse),
            palette.accent.gamma_multiply(opacity),
        );

        ui.add_space(28.0);

        let cta = ui.ctx().animate_bool_with_time(
            Id::new("cta_visible"),
            landing.show_upload_button,
            0.2,
        );
        if landing.show_upload_button {
            let button = egui::Button::new(
                RichText::new(UPLOAD_BUTTON)
                    .size(18.0)
                    .strong()
                    .color(palette.text.gamma_multiply(cta * opacity)),
            )
            .min_size(Vec2::new(220.0, 44.0));
            if ui.add(button).clicked() {
                intent = Some(Intent::PickFile);
            }
        } else if let Some(caption) = &landing.progress {
            ui.add_space(12.0);
            ui.label(RichText::new(caption).color(palette.muted));
        }

        if let Some(error) = &landing.error {
            ui.add_space(16.0);
            ui.label(RichText::new(error).color(palette.error));
        }
    });

    intent
}

fn paint_result(
    ui: &mut egui::Ui,
    card: &ResultCard,
    palette: &Palette,
    time: f64,
    opacity: f32,
) -> Option<Intent> {
    let mut intent = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.10 + 20.0 * (1.0 - opacity));

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(GLYPH_SIZE * 1.6), Sense::hover());
        let sway = 6.0 * wave(time, 5.0, 0.0);
        let painter = ui.painter();
        painter.circle_filled(rect.center(), GLYPH_SIZE * 0.8, palette.halo.gamma_multiply(opacity));
        painter.text(
            rect.center() + Vec2::new(sway, 0.0),
            Align2::CENTER_CENTER,
            card.glyph,
            FontId::proportional(GLYPH_SIZE * 1.1),
            palette.text.gamma_multiply(opacity),
        );

        ui.add_space(16.0);
        ui.label(
            RichText::new(&card.caption)
                .size(36.0)
                .strong()
                .color(palette.text.gamma_multiply(opacity)),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(&card.confidence)
                .size(20.0)
                .color(palette.muted.gamma_multiply(opacity)),
        );

        ui.add_space(32.0);
        let button = egui::Button::new(RichText::new(RESET_BUTTON).size(16.0).strong())
            .min_size(Vec2::new(160.0, 40.0));
        if ui.add(button).clicked() {
            intent = Some(Intent::Reset);
        }
    });

    intent
}

/// Sine wave in [-1, 1] with the given period in seconds.
fn wave(time: f64, period: f64, phase: f64) -> f32 {
    (time * TAU / period + phase).sin() as f32
}
