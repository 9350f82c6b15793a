//! Replays a frame sketch onto a Canvas2D context.

use std::f64::consts::PI;

use lumen_engine::{DrawOp, FrameSketch};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Clear the surface and execute every draw command in order.
pub fn replay(ctx: &CanvasRenderingContext2d, sketch: &FrameSketch) -> Result<(), JsValue> {
    let (w, h) = (sketch.width() as f64, sketch.height() as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    for op in sketch.ops() {
        match op {
            DrawOp::Backdrop { start, end } => {
                let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
                gradient.add_color_stop(0.0, &start.css())?;
                gradient.add_color_stop(1.0, &end.css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            DrawOp::Circle {
                center,
                radius,
                fill,
            } => {
                ctx.begin_path();
                ctx.set_fill_style_str(&fill.css());
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, PI * 2.0)?;
                ctx.fill();
            }
            DrawOp::Line {
                from,
                to,
                width,
                stroke,
            } => {
                ctx.begin_path();
                ctx.set_stroke_style_str(&stroke.css());
                ctx.set_line_width(*width as f64);
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
        }
    }
    Ok(())
}
