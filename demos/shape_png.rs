//! Renders a gradient star with a dashed border to a PNG.
//!
//! ```text
//! cargo run --example shape_png -- star.png
//! ```

use quire::render::{FrameResult, TinySkiaBackend};
use quire::{
    Color, DashPattern, LineJoin, Point, Rect, ShapeConfig, ShapeHost, ShapeItem, StrokeStyle,
    VectorPath,
};

const CONFIG: &str = r##"{
    "margins": { "top": 16, "bottom": 16, "leading": 16, "trailing": 16 },
    "presets": {
        "sunny_morning": [
            { "position": 0.0, "color": "#F6D365" },
            { "position": 1.0, "color": "#FDA085" }
        ],
        "deep_blue": [
            { "position": 0.0, "color": "#E0C3FC" },
            { "position": 0.5, "color": "#A8C0FF" },
            { "position": 1.0, "color": "#8EC5FC" }
        ]
    }
}"##;

fn star(points: usize) -> VectorPath {
    let mut path = VectorPath::new();
    #[allow(clippy::cast_precision_loss)]
    let step = core::f32::consts::PI / points as f32;
    for i in 0..points * 2 {
        let radius = if i % 2 == 0 { 1.0 } else { 0.45 };
        #[allow(clippy::cast_precision_loss)]
        let angle = step.mul_add(i as f32, -core::f32::consts::FRAC_PI_2);
        let point = Point::new(radius * angle.cos(), radius * angle.sin());
        if i == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.close();
    path
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    quire::logging::install_tracing();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "shape.png".to_owned());
    let config = ShapeConfig::from_json(CONFIG)?;

    let backend = TinySkiaBackend::new(256, 256).ok_or("invalid surface size")?;
    let mut host = ShapeHost::new(backend);
    host.backend_mut().set_clear_color(Color::WHITE);

    let mut background = ShapeItem::from_config(&config);
    background.set_path(VectorPath::rect(Rect::from_xywh(0.0, 0.0, 1.0, 1.0)));
    background.set_geometry(Rect::from_xywh(0.0, 0.0, 256.0, 256.0));
    background.set_fill_preset(&config.presets, "deep_blue")?;
    background.set_stroke(StrokeStyle::none());
    host.attach(background);

    let mut shape = ShapeItem::from_config(&config);
    shape.set_path(star(5));
    shape.set_geometry(Rect::from_xywh(32.0, 32.0, 192.0, 192.0));
    shape.set_fill_preset(&config.presets, "sunny_morning")?;
    shape.set_stroke(
        StrokeStyle::new(3.0, Color::from_hex("#5B3A29"))
            .cosmetic(true)
            .with_join(LineJoin::Round)
            .dashed(DashPattern::new(vec![4.0, 2.0])),
    );
    host.attach(shape);

    if host.frame() == FrameResult::Presented {
        host.backend().pixmap().save_png(&output)?;
        tracing::info!(%output, "wrote shape");
    }
    Ok(())
}
