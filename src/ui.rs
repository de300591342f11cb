use crate::moth::Coloration;
use crate::population::History;
use crate::render::moth_rgb;
use crate::simulation::{Background, PredatorMode, PredatorModeToggled, ResetRequested, Simulation};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

const CHART_SIZE: egui::Vec2 = egui::vec2(360.0, 160.0);

fn moth_color32(coloration: Coloration) -> egui::Color32 {
    let [r, g, b] = moth_rgb(coloration);
    egui::Color32::from_rgb(r, g, b)
}

/// System for the control panel: background slider, reset, predator mode, status
pub fn controls_ui(
    mut contexts: EguiContexts,
    mut background: ResMut<Background>,
    mut simulation: ResMut<Simulation>,
    predator_mode: Res<PredatorMode>,
    mut resets: EventWriter<ResetRequested>,
    mut toggles: EventWriter<PredatorModeToggled>,
) {
    egui::Window::new("Controls")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(simulation.status_text());
            ui.separator();

            // Only write back on change so the backdrop isn't recolored every frame
            let mut brightness = background.brightness;
            if ui
                .add(egui::Slider::new(&mut brightness, 0..=255).text("Background"))
                .changed()
            {
                background.brightness = brightness;
            }

            ui.horizontal(|ui| {
                if ui.button("⟲ Reset").clicked() {
                    resets.send(ResetRequested);
                }

                let run_text = if simulation.is_stopped() {
                    "▶ Resume"
                } else {
                    "⏸ Stop"
                };
                if ui.button(run_text).clicked() {
                    if simulation.is_stopped() {
                        simulation.start(&mut rand::thread_rng());
                    } else {
                        simulation.stop();
                    }
                }
            });

            let predator_text = format!(
                "Toggle Predator Mode: {}",
                if predator_mode.0 { "ON" } else { "OFF" }
            );
            if ui.button(predator_text).clicked() {
                toggles.send(PredatorModeToggled);
            }

            ui.separator();
            let counts = simulation.population().counts();
            ui.label(format!("Moths: {}", simulation.population().len()));
            ui.colored_label(moth_color32(Coloration::Light), format!("Light: {}", counts.light));
            ui.colored_label(moth_color32(Coloration::Dark), format!("Dark: {}", counts.dark));
            ui.label(format!("Generations recorded: {}", simulation.history().len()));
        });
}

/// System for the population history chart
pub fn history_chart_ui(mut contexts: EguiContexts, simulation: Res<Simulation>) {
    egui::Window::new("Population History")
        .default_pos(egui::pos2(10.0, 560.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            draw_history_chart(ui, simulation.history(), simulation.config().population_size);
        });
}

/// Two dots per generation (light and dark count) over a fixed number of slots
fn draw_history_chart(ui: &mut egui::Ui, history: &History, population_size: usize) {
    let (response, painter) = ui.allocate_painter(CHART_SIZE, egui::Sense::hover());
    let rect = response.rect;

    let origin = egui::pos2(rect.left() + 30.0, rect.bottom() - 20.0);
    let top = rect.top() + 10.0;
    let right = rect.right() - 10.0;
    let axis = egui::Stroke::new(1.0, egui::Color32::from_gray(0x44));
    let label_color = ui.visuals().text_color();

    painter.line_segment([egui::pos2(origin.x, top), origin], axis);
    painter.line_segment([origin, egui::pos2(right, origin.y)], axis);
    painter.text(
        rect.left_top(),
        egui::Align2::LEFT_TOP,
        "Moth Count",
        egui::FontId::proportional(11.0),
        label_color,
    );
    painter.text(
        rect.right_bottom(),
        egui::Align2::RIGHT_BOTTOM,
        "Generations →",
        egui::FontId::proportional(11.0),
        label_color,
    );

    let slot_width = (right - origin.x) / history.capacity() as f32;
    let per_moth = (origin.y - top) / population_size.max(1) as f32;

    for (i, entry) in history.iter().enumerate() {
        let x = origin.x + i as f32 * slot_width;
        for (count, coloration) in [
            (entry.light, Coloration::Light),
            (entry.dark, Coloration::Dark),
        ] {
            let y = origin.y - count as f32 * per_moth;
            painter.circle_filled(egui::pos2(x, y), 3.0, moth_color32(coloration));
        }
    }
}
