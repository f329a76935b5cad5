use graffiti_core::{
    glyph_count, layout_glyphs, path_length, Drip, Glyph, Point, Scene, Stroke, StrokeStyle,
    PREVIEW_ALPHA, STROKE_ALPHA,
};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

const TEXT_FONT_FAMILY: &str = "\"Segoe UI\", sans-serif";

/// Canvas2D drawing of the wall. Holds no scene state of its own.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
        })
    }

    pub fn draw_scene(&self, scene: &Scene, blur: bool) {
        let viewport = scene.viewport();
        let filter = if blur { "blur(1px)" } else { "none" };
        self.ctx.save();
        self.ctx.set_filter(filter);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        for stroke in scene.strokes() {
            self.draw_stroke(stroke, &stroke.pixel_path(viewport));
        }
        self.ctx.restore();

        self.ctx.save();
        self.ctx.set_filter(filter);
        for drip in scene.drips() {
            self.draw_drip(drip, scene);
        }
        self.ctx.restore();
    }

    fn draw_stroke(&self, stroke: &Stroke, path: &[Point]) {
        self.ctx.save();
        self.spray_path(path, &stroke.spray_color, stroke.thickness, STROKE_ALPHA);
        let glyphs = layout_glyphs(path, &stroke.text, stroke.num_chars);
        self.draw_glyphs(&glyphs, stroke.text_size, &stroke.text_color);
        self.ctx.restore();
    }

    /// In-progress gesture, drawn with the style the controls show right now.
    pub fn draw_preview(&self, path: &[Point], style: &StrokeStyle) {
        self.ctx.save();
        self.spray_path(path, &style.spray_color, style.thickness(), PREVIEW_ALPHA);
        let count = glyph_count(path_length(path), style.text_size);
        let glyphs = layout_glyphs(path, &style.text, count);
        self.draw_glyphs(&glyphs, style.text_size, &style.text_color);
        self.ctx.restore();
    }

    // A single point is a dot; anything longer is a round-capped polyline.
    fn spray_path(&self, path: &[Point], color: &str, thickness: f64, alpha: f64) {
        let Some(first) = path.first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.set_fill_style_str(color);
        ctx.set_line_width(thickness);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_global_alpha(alpha);
        ctx.begin_path();
        if path.len() == 1 {
            let _ = ctx.arc(first.x, first.y, thickness / 2.0, 0.0, TAU);
            ctx.fill();
        } else {
            ctx.move_to(first.x, first.y);
            for p in &path[1..] {
                ctx.line_to(p.x, p.y);
            }
            ctx.stroke();
        }
    }

    fn draw_glyphs(&self, glyphs: &[Glyph], text_size: u32, color: &str) {
        if glyphs.is_empty() {
            return;
        }
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.set_font(&format!("bold {}px {}", text_size, TEXT_FONT_FAMILY));
        ctx.set_text_baseline("middle");
        ctx.set_text_align("center");
        ctx.set_global_alpha(1.0);
        let mut buf = [0u8; 4];
        for g in glyphs {
            let _ = ctx.fill_text(g.ch.encode_utf8(&mut buf), g.at.x, g.at.y);
        }
    }

    fn draw_drip(&self, drip: &Drip, scene: &Scene) {
        if drip.points.len() < 2 {
            return;
        }
        let viewport = scene.viewport();
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(drip.alpha);
        ctx.set_stroke_style_str(&drip.color);
        ctx.set_line_width(drip.thick);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.begin_path();
        let anchor = drip.pixel_anchor(viewport);
        ctx.move_to(anchor.x, anchor.y);
        for p in drip.pixel_points(viewport) {
            ctx.line_to(p.x, p.y);
        }
        ctx.stroke();
        ctx.restore();
    }
}
