use crossterm::style::Color as TermColor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use crate::gym::{
    taxi_fuel::{
        render::{palette, Marks},
        Frame, MAX_FUEL,
    },
    TaxiFuel,
};

mod replay;

pub use replay::Replay;

/// A bordered view of a [`TaxiFuel`] environment: the grid, the last action, and the fuel gauge in the title
pub struct GridView<'a> {
    env: &'a TaxiFuel,
}

impl<'a> GridView<'a> {
    pub fn new(env: &'a TaxiFuel) -> Self {
        Self { env }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.env.taxi_state();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(
                "Taxi Fuel | fuel {}/{} | reward {}",
                state.fuel, MAX_FUEL, self.env.report["reward"]
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        Frame::new(state, self.env.last_action()).render(inner, buf);
    }
}

impl Widget for &Frame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.rows().iter().enumerate() {
            let y = area.y + y as u16;
            if y >= area.bottom() {
                return;
            }
            for (x, glyph) in row.iter().enumerate() {
                let x = area.x + x as u16;
                if x >= area.right() {
                    break;
                }
                buf.get_mut(x, y)
                    .set_char(glyph.ch)
                    .set_style(style(glyph.marks));
            }
        }

        let y = area.y + self.rows().len() as u16;
        if y < area.bottom() {
            buf.set_stringn(
                area.x,
                y,
                self.caption(),
                area.width as usize,
                Style::default(),
            );
        }
    }
}

fn style(marks: Marks) -> Style {
    let (fg, bg, bold) = palette(marks);
    let mut style = Style::default();
    if let Some(fg) = fg {
        style = style.fg(color(fg));
    }
    if let Some(bg) = bg {
        style = style.bg(color(bg));
    }
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

fn color(color: TermColor) -> Color {
    match color {
        TermColor::Blue => Color::Blue,
        TermColor::Magenta => Color::Magenta,
        TermColor::Yellow => Color::Yellow,
        TermColor::Green => Color::Green,
        _ => Color::Reset,
    }
}
