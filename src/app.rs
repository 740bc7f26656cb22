use eframe::egui;
use nalgebra::Vector2;
use rand::Rng; // This must be present to use .gen_range()

use crate::model::Params;
use crate::model::SolutionSet;
use crate::model::{PARAM_MAX, PARAM_MIN, PARAM_STEP};

use crate::render::draw_arrow;
use crate::render::draw_axes_2d;
use crate::render::draw_dashed_segment;
use crate::render::draw_grid_2d;
use crate::render::draw_label;
use crate::render::draw_line_2d;
use crate::render::draw_point_marker;
use crate::render::draw_ring_marker;
use crate::render::{PlaneMapper, VIEW_HALF_EXTENT};


pub struct NullspaceApp {
    params: Params,

    // Draw toggles
    draw_grid: bool,
    draw_null_line: bool,
    draw_solution_line: bool,
    draw_difference: bool,
    grid_opacity: u8, // 0 is invisible, 255 is fully opaque
}

impl Default for NullspaceApp {
    fn default() -> Self {
        Self {
            params: Params::default(),
            //draw defaults
            draw_grid: true,
            draw_null_line: true,
            draw_solution_line: true,
            draw_difference: true,
            grid_opacity: 30, // A nice subtle default
        }
    }
}

impl NullspaceApp {
    fn randomize_params(&mut self) {
        let mut rng = rand::thread_rng();

        let max = (PARAM_MAX / PARAM_STEP).round() as i32;

        // Stay on the 0.1 grid the sliders use
        self.params.b_scalar = rng.gen_range(-max..=max) as f64 * PARAM_STEP;
        self.params.lambda1 = rng.gen_range(-max..=max) as f64 * PARAM_STEP;
        self.params.lambda2 = rng.gen_range(-max..=max) as f64 * PARAM_STEP;

        log::debug!(
            "randomized parameters: b={:.1} lambda1={:.1} lambda2={:.1}",
            self.params.b_scalar,
            self.params.lambda1,
            self.params.lambda2,
        );
    }

    fn reset_params(&mut self) {
        self.params = Params::default();
        log::debug!("reset parameters to defaults");
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() { return; }
        let input = ctx.input(|i| i.clone());

        if input.key_pressed(egui::Key::N) { self.draw_null_line = !self.draw_null_line; }
        if input.key_pressed(egui::Key::S) { self.draw_solution_line = !self.draw_solution_line; }
        if input.key_pressed(egui::Key::D) { self.draw_difference = !self.draw_difference; }
        if input.key_pressed(egui::Key::G) { self.draw_grid = !self.draw_grid; }

        if input.key_pressed(egui::Key::R) {
            if input.modifiers.shift {
                self.reset_params();
            } else {
                self.randomize_params();
            }
        }
        if input.key_pressed(egui::Key::C) { self.reset_params(); }
    }


    fn vec_readout(ui: &mut egui::Ui, name: &str, name_color: egui::Color32, v: &Vector2<f64>) {
        ui.horizontal(|ui| {
            ui.colored_label(name_color, format!("{:<10}", name));
            for val in [v.x, v.y] {
                let color = if val.abs() < 0.001 {
                    egui::Color32::DARK_GRAY
                } else if val > 0.0 {
                    egui::Color32::LIGHT_GREEN
                } else {
                    egui::Color32::LIGHT_RED
                };
                ui.colored_label(color, format!("{:>7.3}", val));
            }
        });
    }


    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        let yellow = egui::Color32::YELLOW;
        let purple = egui::Color32::from_rgb(160, 32, 240);

        ui.heading("Null Space Explorer");
        ui.add_space(4.0);
        ui.label("Two solutions of Ax = b, and why their difference is a solution of Ax = 0.");

        ui.collapsing("Hotkeys", |ui| {
            ui.label("N: Null line | S: Solution line | D: Difference\nG: Grid | R: Random | Shift+R: Reset");
        });

        ui.separator();
        ui.heading("Parameters");
        ui.add(
            egui::Slider::new(&mut self.params.b_scalar, PARAM_MIN..=PARAM_MAX)
                .step_by(PARAM_STEP)
                .text("b along column space"),
        );
        ui.add(
            egui::Slider::new(&mut self.params.lambda1, PARAM_MIN..=PARAM_MAX)
                .step_by(PARAM_STEP)
                .text("lambda 1"),
        );
        ui.add(
            egui::Slider::new(&mut self.params.lambda2, PARAM_MIN..=PARAM_MAX)
                .step_by(PARAM_STEP)
                .text("lambda 2"),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Randomize [R]").clicked() {
                self.randomize_params();
            }
            if ui.button("Reset [Shift+R]").clicked() {
                self.reset_params();
            }
        });

        ui.separator();
        ui.heading("View");
        ui.checkbox(&mut self.draw_grid, "Grid [G]");
        ui.checkbox(&mut self.draw_null_line, "Null space line [N]");
        ui.checkbox(&mut self.draw_solution_line, "Solution line [S]");
        ui.checkbox(&mut self.draw_difference, "Difference vector [D]");
        ui.add_space(6.0);
        ui.add(egui::Slider::new(&mut self.grid_opacity, 0..=255).text("Grid Alpha"));

        ui.separator();
        ui.heading("Solutions");
        let solution = SolutionSet::derive(&self.params);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            Self::vec_readout(ui, "xp", egui::Color32::LIGHT_GRAY, &solution.xp);
            Self::vec_readout(ui, "x1", yellow, &solution.x1);
            Self::vec_readout(ui, "x2", purple, &solution.x2);
            Self::vec_readout(ui, "x1 - x2", egui::Color32::WHITE, &solution.diff);
        });

        ui.add_space(4.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            Self::vec_readout(ui, "b = A xp", egui::Color32::LIGHT_GRAY, &solution.b);
            Self::vec_readout(ui, "A x1", yellow, &solution.ax1);
            Self::vec_readout(ui, "A x2", purple, &solution.ax2);
            Self::vec_readout(ui, "A(x1 - x2)", egui::Color32::WHITE, &solution.a_diff);
        });

        ui.separator();
        ui.heading("The argument");
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("1.  A x1 = b and A x2 = b, because both solutions sit on the solution line.");
            ui.label("2.  A(x1 - x2) = A x1 - A x2 = b - b = 0.");
            ui.label("3.  So x1 - x2 solves Ax = 0: it lies in the null space of A.");
        });
        ui.add_space(4.0);
        ui.label("Drag lambda 1 and lambda 2: the two arrows move along the solution line, but on the right their outputs stay glued to b.");
    }


    fn draw_domain_panel(&self, ui: &egui::Ui, rect: egui::Rect, s: &SolutionSet) {
        let painter = ui.painter_at(rect);
        let mapper = PlaneMapper::new(rect);

        let yellow = egui::Color32::YELLOW;
        let purple = egui::Color32::from_rgb(160, 32, 240);
        let null_c = egui::Color32::from_hex("#8BC9D7").unwrap();
        let sol_c = egui::Color32::from_hex("#83B366").unwrap();

        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

        if self.draw_grid {
            let grid_c = egui::Color32::from_rgba_unmultiplied(80, 140, 220, self.grid_opacity);
            draw_grid_2d(&painter, &mapper, grid_c, VIEW_HALF_EXTENT as i32);
        }
        draw_axes_2d(&painter, &mapper);

        if self.draw_null_line {
            draw_line_2d(&painter, &mapper, &s.null_line, null_c);
            let anchor = s.null_line.anchor + s.null_line.direction * 4.0;
            draw_label(&painter, mapper.to_screen(anchor), "null space of A", null_c);
        }

        if self.draw_solution_line {
            draw_line_2d(&painter, &mapper, &s.solution_line, sol_c);
            let anchor = s.solution_line.anchor - s.solution_line.direction * 4.0;
            draw_label(&painter, mapper.to_screen(anchor), "solutions of Ax = b", sol_c);
        }

        // The two chosen solutions
        let origin = mapper.to_screen(Vector2::zeros());
        draw_arrow(&painter, origin, mapper.to_screen(s.x1), 2.5, yellow);
        draw_label(&painter, mapper.to_screen(s.x1), "x1", yellow);
        draw_arrow(&painter, origin, mapper.to_screen(s.x2), 2.5, purple);
        draw_label(&painter, mapper.to_screen(s.x2), "x2", purple);

        draw_point_marker(&painter, mapper.to_screen(s.xp), sol_c);
        draw_label(&painter, mapper.to_screen(s.xp), "xp", sol_c);

        if self.draw_difference && s.diff.norm() > 1e-9 {
            // Tip to tip, then the same vector hanging off the origin,
            // where it visibly lies on the null space line.
            draw_dashed_segment(
                &painter,
                mapper.to_screen(s.x2),
                mapper.to_screen(s.x1),
                egui::Color32::WHITE,
            );
            draw_arrow(&painter, origin, mapper.to_screen(s.diff), 2.5, egui::Color32::WHITE);
            draw_label(&painter, mapper.to_screen(s.diff), "x1 - x2", egui::Color32::WHITE);
        }

        painter.text(
            rect.left_top() + egui::vec2(8.0, 6.0),
            egui::Align2::LEFT_TOP,
            "Input space (x)",
            egui::FontId::proportional(15.0),
            egui::Color32::LIGHT_GRAY,
        );
    }


    fn draw_codomain_panel(&self, ui: &egui::Ui, rect: egui::Rect, s: &SolutionSet) {
        let painter = ui.painter_at(rect);
        let mapper = PlaneMapper::new(rect);

        let yellow = egui::Color32::YELLOW;
        let purple = egui::Color32::from_rgb(160, 32, 240);
        let col_c = egui::Color32::from_hex("#FF7154").unwrap();

        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

        if self.draw_grid {
            let grid_c = egui::Color32::from_rgba_unmultiplied(80, 140, 220, self.grid_opacity);
            draw_grid_2d(&painter, &mapper, grid_c, VIEW_HALF_EXTENT as i32);
        }
        draw_axes_2d(&painter, &mapper);

        draw_line_2d(&painter, &mapper, &s.column_line, col_c);
        let anchor = s.column_line.anchor - s.column_line.direction * 6.0;
        draw_label(&painter, mapper.to_screen(anchor), "column space of A", col_c);

        // Both images land on the same point; different widths keep
        // the overlap visible.
        let origin = mapper.to_screen(Vector2::zeros());
        draw_arrow(&painter, origin, mapper.to_screen(s.ax1), 4.0, yellow);
        draw_arrow(&painter, origin, mapper.to_screen(s.ax2), 2.0, purple);

        draw_ring_marker(&painter, mapper.to_screen(s.b), egui::Color32::WHITE);
        draw_label(&painter, mapper.to_screen(s.b), "b = A x1 = A x2", egui::Color32::WHITE);

        if self.draw_difference {
            draw_ring_marker(&painter, mapper.to_screen(s.a_diff), egui::Color32::WHITE);
            draw_label(&painter, mapper.to_screen(s.a_diff), "A(x1 - x2) = 0", egui::Color32::WHITE);
        }

        painter.text(
            rect.left_top() + egui::vec2(8.0, 6.0),
            egui::Align2::LEFT_TOP,
            "Output space (Ax)",
            egui::FontId::proportional(15.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}


impl eframe::App for NullspaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);

        // --- SIDEBAR ---
        egui::SidePanel::left("controls")
            .width_range(300.0..=360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        // Everything drawn this frame derives from the three scalars,
        // including whatever the sliders just changed.
        let solution = SolutionSet::derive(&self.params);

        // --- VIEWPORT ---
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let gap = 12.0;
            let side = ((avail.x - gap) * 0.5).min(avail.y).max(50.0);

            let (rect, _resp) = ui.allocate_exact_size(
                egui::vec2(side * 2.0 + gap, side),
                egui::Sense::hover(),
            );
            let domain = egui::Rect::from_min_size(rect.min, egui::vec2(side, side));
            let codomain = egui::Rect::from_min_size(
                egui::pos2(rect.min.x + side + gap, rect.min.y),
                egui::vec2(side, side),
            );

            self.draw_domain_panel(ui, domain, &solution);
            self.draw_codomain_panel(ui, codomain, &solution);
        });
    }
}
