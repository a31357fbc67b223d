use crossterm::style::{Color, ContentStyle, Stylize};

use super::{
    action::Action,
    codec::{TaxiState, IN_TAXI},
    grid::{Pos, LOCS, MAP},
};

/// How [`TaxiFuel::render`](super::TaxiFuel::render) delivers its output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Write the colored grid to standard output
    #[default]
    Human,
    /// Return the colored grid as a string
    Ansi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Taxi {
    Empty,
    Full,
}

/// Annotations on a single map character
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    pub taxi: Option<Taxi>,
    pub passenger: bool,
    pub destination: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub marks: Marks,
}

/// A decoded state laid out on the map, ready to be styled for a terminal
#[derive(Clone, Debug)]
pub struct Frame {
    rows: Vec<Vec<Glyph>>,
    last_action: Option<Action>,
}

impl Frame {
    pub fn new(state: TaxiState, last_action: Option<Action>) -> Self {
        let mut rows: Vec<Vec<Glyph>> = MAP
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| Glyph {
                        ch,
                        marks: Marks::default(),
                    })
                    .collect()
            })
            .collect();

        let (tr, tc) = cell(state.taxi());
        if state.passenger < IN_TAXI {
            rows[tr][tc].marks.taxi = Some(Taxi::Empty);
            let (pr, pc) = cell(LOCS[state.passenger]);
            rows[pr][pc].marks.passenger = true;
        } else {
            let taxi = &mut rows[tr][tc];
            taxi.marks.taxi = Some(Taxi::Full);
            if taxi.ch == ' ' {
                taxi.ch = '_';
            }
        }

        let (dr, dc) = cell(LOCS[state.destination]);
        rows[dr][dc].marks.destination = true;

        Self { rows, last_action }
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    /// The line under the grid: the last action in parentheses, or empty before the first step
    pub fn caption(&self) -> String {
        self.last_action
            .map(|action| format!("  ({})", action))
            .unwrap_or_default()
    }

    /// Render the grid with ANSI colors, followed by the caption line
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for glyph in row {
                if glyph.marks == Marks::default() {
                    out.push(glyph.ch);
                } else {
                    out.push_str(&ansi_style(glyph.marks).apply(glyph.ch).to_string());
                }
            }
            out.push('\n');
        }
        out.push_str(&self.caption());
        out.push('\n');
        out
    }
}

/// Position of a grid cell in the map text
fn cell((row, col): Pos) -> Pos {
    (1 + row, 2 * col + 1)
}

/// Taxi sets the background, a waiting passenger takes the foreground over the destination
pub fn palette(marks: Marks) -> (Option<Color>, Option<Color>, bool) {
    let fg = if marks.passenger {
        Some(Color::Blue)
    } else if marks.destination {
        Some(Color::Magenta)
    } else {
        None
    };
    let bg = marks.taxi.map(|taxi| match taxi {
        Taxi::Empty => Color::Yellow,
        Taxi::Full => Color::Green,
    });
    (fg, bg, marks.passenger)
}

fn ansi_style(marks: Marks) -> ContentStyle {
    let (fg, bg, bold) = palette(marks);
    let mut style = ContentStyle::new();
    if let Some(fg) = fg {
        style = style.with(fg);
    }
    if let Some(bg) = bg {
        style = style.on(bg);
    }
    if bold {
        style = style.bold();
    }
    style
}
