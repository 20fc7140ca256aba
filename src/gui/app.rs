use super::{Config, FpsLimiter};
use crate::{LifeEngine, Seed};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};

pub struct App {
    pub(super) engine: Option<LifeEngine>, // Built on the first frame, once the canvas size is known.
    pub(super) seed: Seed,                 // Seeding strategy for the next reseed.
    pub(super) do_one_step: bool,          // Advance exactly one generation while paused.
    pub(super) texture: TextureHandle,     // Texture handle of the board.
    pub(super) board_rect: Option<Rect>,   // Part of the window displaying the board.
    pub(super) fps_limiter: FpsLimiter,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        Self {
            engine: None,
            seed: Config::DEFAULT_SEED,
            do_one_step: false,
            texture: ctx.load_texture(
                "life board",
                ColorImage::default(),
                TextureOptions::default(),
            ),
            board_rect: None,
            fps_limiter: FpsLimiter::default(),
        }
    }

    fn handle_input(&mut self, ctx: &Context, board_rect: Rect) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                engine.toggle_pause();
            }

            // direct cell editing, accepted by the engine only while paused
            if input.pointer.primary_clicked() {
                if let Some(pos) = input.pointer.interact_pos() {
                    if board_rect.contains(pos) {
                        let row = ((pos.y - board_rect.top()) / Config::CELL_SIZE) as usize;
                        let col = ((pos.x - board_rect.left()) / Config::CELL_SIZE) as usize;
                        engine.edit_cell(row, col);
                    }
                }
            }
        });
    }

    fn update_engine(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        if self.do_one_step {
            engine.step_once();
            self.do_one_step = false;
        } else {
            engine.advance_generation();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(board_rect) = self.board_rect {
                    self.handle_input(ctx, board_rect);
                }

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(Config::MAX_FPS);
    }
}
