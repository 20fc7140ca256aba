#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(880., 620.))
            .with_min_inner_size(vec2(320., 240.)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(life_sketch::App::new(&cc.egui_ctx)))),
    )
    .unwrap();
}
