use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{VizError, VizResult},
    render::{commands::LineStroke, composite::over_in_place, surface::DrawSurface},
};

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 bytes, as image encoders expect them.
    pub fn into_straight(self) -> Vec<u8> {
        let mut data = self.data;
        if !self.premultiplied {
            return data;
        }
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        data
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Straight-alpha color written by `clear_rect`; transparent when unset.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Raster surface backed by `vello_cpu`.
///
/// Fills and strokes are batched into a render context and composited onto the pixel buffer
/// (premultiplied RGBA8) whenever a clear or a readback needs the pixels, so the issue order
/// is what ends up on screen.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    clear_premul: [u8; 4],
    data: Vec<u8>,
    ctx: vello_cpu::RenderContext,
    pending: bool,
}

impl CpuSurface {
    pub fn new(canvas: Canvas, settings: &RenderSettings) -> VizResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| VizError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| VizError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(VizError::render("surface width/height must be > 0"));
        }

        let clear_premul = settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8::rgba(r, g, b, a).to_premul())
            .unwrap_or([0, 0, 0, 0]);
        let mut data = vec![0u8; usize::from(width) * usize::from(height) * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&clear_premul);
        }

        Ok(Self {
            canvas,
            width,
            height,
            clear_premul,
            data,
            ctx: vello_cpu::RenderContext::new(width, height),
            pending: false,
        })
    }

    /// Premultiplied RGBA8 at `(x, y)`, with every issued primitive applied.
    pub fn pixel(&mut self, x: u32, y: u32) -> VizResult<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return Err(VizError::render(format!(
                "pixel ({x}, {y}) outside {}x{} surface",
                self.canvas.width, self.canvas.height
            )));
        }
        self.flush_pending()?;
        let idx = ((y as usize) * usize::from(self.width) + (x as usize)) * 4;
        Ok([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    pub fn into_frame(mut self) -> VizResult<FrameRGBA> {
        self.flush_pending()?;
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.data,
            premultiplied: true,
        })
    }

    fn flush_pending(&mut self) -> VizResult<()> {
        if !self.pending {
            return Ok(());
        }
        let mut ctx = std::mem::replace(
            &mut self.ctx,
            vello_cpu::RenderContext::new(self.width, self.height),
        );
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(&mut self.data, layer.data_as_u8_slice())?;
        self.pending = false;
        Ok(())
    }

    fn set_color(&mut self, c: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear_rect(&mut self, rect: Rect) -> VizResult<()> {
        self.flush_pending()?;

        let rect = rect.abs();
        let (w, h) = (usize::from(self.width), usize::from(self.height));
        let x0 = (rect.x0.floor().max(0.0) as usize).min(w);
        let x1 = (rect.x1.ceil().max(0.0) as usize).min(w);
        let y0 = (rect.y0.floor().max(0.0) as usize).min(h);
        let y1 = (rect.y1.ceil().max(0.0) as usize).min(h);
        for y in y0..y1 {
            let row = &mut self.data[(y * w + x0) * 4..(y * w + x1) * 4];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&self.clear_premul);
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> VizResult<()> {
        self.set_color(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        self.pending = true;
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &LineStroke) -> VizResult<()> {
        // Butt-capped: a zero-length or zero-width line covers nothing.
        let Some(quad) = line_quad(from, to, stroke.width) else {
            return Ok(());
        };
        self.set_color(stroke.color);
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(quad[0]));
        for &p in &quad[1..] {
            path.line_to(point_to_cpu(p));
        }
        path.close_path();
        self.ctx.fill_path(&path);
        self.pending = true;
        Ok(())
    }
}

/// Corners of the rectangle covered by a butt-capped line of `width`.
fn line_quad(from: Point, to: Point, width: f64) -> Option<[Point; 4]> {
    let d = to - from;
    let len = d.hypot();
    if !(len > 0.0) || !(width > 0.0) {
        return None;
    }
    let n = kurbo::Vec2::new(-d.y, d.x) * (width / (2.0 * len));
    Some([from + n, to + n, to - n, from - n])
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
