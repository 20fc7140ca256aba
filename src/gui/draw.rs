use super::{App, Config};
use crate::{GridGeometry, LifeEngine, Seed};
use eframe::egui::{
    load::SizedTexture, pos2, vec2, Button, ColorImage, Image, Rect, RichText, Stroke,
    TextureFilter, TextureOptions, TextureWrapMode, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let (paused, generation, population) =
            (engine.is_paused(), engine.generation(), engine.population());

        let text = if paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            if let Some(engine) = self.engine.as_mut() {
                engine.toggle_pause();
            }
        }

        ui.add_enabled_ui(paused, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        ui.add_space(Config::WIDGET_GAP);

        ui.label(Self::new_text("Seeding: "));
        ui.radio_value(
            &mut self.seed,
            Seed::Random { seed: None },
            Self::new_text("Random"),
        );
        ui.radio_value(&mut self.seed, Seed::Pattern, Self::new_text("Glider"));
        ui.radio_value(&mut self.seed, Seed::Blank, Self::new_text("Blank"));

        if ui.add(Self::new_button("Reseed")).clicked() {
            if let Some(engine) = self.engine.take() {
                self.engine = Some(LifeEngine::new(*engine.geometry(), self.seed));
            }
        }

        ui.add_space(Config::WIDGET_GAP);

        ui.label(Self::new_text(&format!("Generation: {}", generation)));
        ui.label(Self::new_text(&format!("Population: {}", population)));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let g = *engine.geometry();
        if g.visible_rows == 0 || g.visible_cols == 0 {
            return;
        }

        // one pixel per visible cell, scaled up by the nearest filter
        let mut image = ColorImage::new([g.visible_cols, g.visible_rows], Config::DEAD_COLOR);
        for (row, col) in engine.alive_visible_cells() {
            image.pixels[row * g.visible_cols + col] = Config::ALIVE_COLOR;
        }

        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
        };
        self.texture.set(image, texture_options);

        let size_px = vec2(
            g.visible_cols as f32 * Config::CELL_SIZE,
            g.visible_rows as f32 * Config::CELL_SIZE,
        );
        let source = SizedTexture::new(self.texture.id(), size_px);
        let response = ui.add(Image::from_texture(source));
        Self::draw_grid_lines(ui, response.rect, g);
        self.board_rect.replace(response.rect);
    }

    fn draw_grid_lines(ui: &Ui, rect: Rect, g: GridGeometry) {
        let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
        let painter = ui.painter();
        for col in 0..=g.visible_cols {
            let x = rect.left() + col as f32 * Config::CELL_SIZE;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for row in 0..=g.visible_rows {
            let y = rect.top() + row as f32 * Config::CELL_SIZE;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        // the viewport size is supplied once: the engine keeps the grid it
        // derived on the first frame even if the window is resized later
        if self.engine.is_none() {
            let area = ui.available_size();
            let board_width = (area.x - Config::CONTROL_PANEL_WIDTH - Config::WIDGET_GAP).max(0.);
            let geometry = GridGeometry::from_viewport(board_width, area.y, Config::CELL_SIZE);
            self.engine = Some(LifeEngine::new(geometry, self.seed));
        }

        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.set_width(Config::CONTROL_PANEL_WIDTH);
                ui.vertical(|ui| {
                    self.draw_controls(ui);
                });
            });

            ui.vertical(|ui| {
                self.draw_board(ui);
            });
        });
    }
}
