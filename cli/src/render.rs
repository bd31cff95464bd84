use flood_core::{Color, Grid};
use flood_protocol::Game;

/// One letter per tile: uppercase inside the region, lowercase outside it.
pub(crate) fn render_grid(grid: &Grid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| {
                    let letter = letter(tile.color);
                    if tile.included {
                        letter.to_ascii_uppercase()
                    } else {
                        letter
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_palette(palette: &[Color]) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{}) {} [{}]", i + 1, color, letter(*color)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub(crate) fn render_history(game: &Game) -> String {
    game.colors()
        .enumerate()
        .map(|(i, color)| format!("{:>3}  {}", i + 1, color))
        .collect::<Vec<_>>()
        .join("\n")
}

fn letter(color: Color) -> char {
    use Color::*;
    match color {
        Red => 'r',
        Yellow => 'y',
        Green => 'g',
        Blue => 'b',
        Purple => 'p',
        Orange => 'o',
    }
}

/// Accepts a palette position (1-based), a color name, or its letter.
pub(crate) fn parse_color(input: &str, palette: &[Color]) -> Option<Color> {
    let input = input.trim();
    if let Ok(position) = input.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| palette.get(index))
            .copied();
    }
    if let Some(color) = Color::from_name(input) {
        return palette.contains(&color).then_some(color);
    }
    palette.iter().copied().find(|&color| {
        input.len() == 1 && input.chars().map(|c| c.to_ascii_lowercase()).eq([letter(color)])
    })
}
