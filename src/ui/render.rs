use ratatui::{
    layout::{Alignment, Rect as Area},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use crate::config::DisplayConfig;
use crate::game::{ball::Field, geometry::Rect, GameState};

// Last terminal row is reserved for the controls hint
const UI_FOOTER_ROWS: u16 = 1;

/// Maps field units onto the canvas dot grid
#[derive(Debug, Clone, Copy)]
struct Projection {
    scale_x: f32,
    scale_y: f32,
}

impl Projection {
    fn new(field: Field, canvas: &BrailleCanvas) -> Self {
        Self {
            scale_x: canvas.dot_width() as f32 / field.width.max(1) as f32,
            scale_y: canvas.dot_height() as f32 / field.height.max(1) as f32,
        }
    }

    /// Dot-space rectangle (x, y, w, h); never thinner than one dot
    fn project(&self, rect: &Rect) -> (usize, usize, usize, usize) {
        let x = (rect.x.max(0) as f32 * self.scale_x) as usize;
        let y = (rect.y.max(0) as f32 * self.scale_y) as usize;
        let w = ((rect.w.max(0) as f32 * self.scale_x).round() as usize).max(1);
        let h = ((rect.h.max(0) as f32 * self.scale_y).round() as usize).max(1);
        (x, y, w, h)
    }
}

pub fn render(frame: &mut Frame, state: &GameState, display: &DisplayConfig, hint: &str) {
    let area = frame.area();
    let fg = rgb(display.foreground_color);
    let bg = rgb(display.background_color);

    // Clear
    let background = Block::default().style(Style::default().bg(bg));
    frame.render_widget(background, area);

    let field_rows = area.height.saturating_sub(UI_FOOTER_ROWS);
    let canvas = rasterize(state, area.width as usize, field_rows as usize);
    render_braille_canvas(frame, &canvas, area, fg, bg);

    draw_controls(frame, area, hint, bg);
}

/// Fill every entity rectangle onto a fresh canvas of `cols`×`rows` cells
fn rasterize(state: &GameState, cols: usize, rows: usize) -> BrailleCanvas {
    let mut canvas = BrailleCanvas::new(cols, rows);
    let projection = Projection::new(state.field, &canvas);

    for rect in state.draw_list().iter() {
        let (x, y, w, h) = projection.project(rect);
        canvas.fill_rect(x, y, w, h);
    }

    canvas
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Area, fg: Color, bg: Color) {
    for row in 0..canvas.rows() {
        let paragraph =
            Paragraph::new(canvas.row_text(row)).style(Style::default().fg(fg).bg(bg));

        let row_area = Area {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(paragraph, row_area);
    }
}

fn draw_controls(frame: &mut Frame, area: Area, hint: &str, bg: Color) {
    if area.height == 0 {
        return;
    }

    let controls = Paragraph::new(hint.to_string())
        .style(Style::default().fg(Color::DarkGray).bg(bg))
        .alignment(Alignment::Center);

    let controls_area = Area {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    frame.render_widget(controls, controls_area);
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
