//! Plain-text rendering of the table.

use crate::view::{CellView, GameView};
use tichect_rules::{BOARD_SIZE, Direction, Rotation};
use tracing::instrument;

/// Storage index shown at screen row/column once the board is turned
/// clockwise by `rotation`.
///
/// Rotation is only a visual transform; storage never moves.
pub fn storage_index(rotation: Rotation, row: usize, col: usize) -> usize {
    let last = BOARD_SIZE - 1;
    let (r, c) = match rotation {
        Rotation::Deg0 => (row, col),
        Rotation::Deg90 => (last - col, row),
        Rotation::Deg180 => (last - row, last - col),
        Rotation::Deg270 => (col, last - row),
    };
    r * BOARD_SIZE + c
}

fn cell_text(cell: &CellView) -> String {
    match (cell.occupant, cell.takeover, cell.winning) {
        (Some(player), _, true) => format!("[{}]", player.symbol()),
        (Some(player), _, false) => format!(" {} ", player.symbol()),
        (None, true, _) => format!("({})", cell.position.to_index() + 1),
        (None, false, _) => format!(" {} ", cell.position.to_index() + 1),
    }
}

/// Draws the board grid, optionally turned by the view's rotation.
///
/// Empty cells show the number used to click them, takeover targets are
/// wrapped in parentheses, and the winning region in brackets.
#[instrument(skip(view))]
pub fn render_board(view: &GameView, rotated: bool) -> String {
    let rotation = if rotated {
        Rotation::from_degrees(view.rotation).unwrap_or_default()
    } else {
        Rotation::Deg0
    };

    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    view.cells
                        .get(storage_index(rotation, row, col))
                        .map(cell_text)
                        .unwrap_or_else(|| "   ".to_string())
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Draws the whole table: turn header, board, checklist, controls, banner.
///
/// On a turned board every attack points down the screen, whatever its
/// direction in storage order.
#[instrument(skip(view))]
pub fn render(view: &GameView, rotated: bool) -> String {
    let rotation = Rotation::from_degrees(view.rotation).unwrap_or_default();
    let direction = if rotated {
        Direction::Down
    } else {
        rotation.attack_direction()
    };
    let mut out = format!(
        "Turn: {}    Rotation: {} (attacks point {})\n\n",
        view.current_player,
        rotation,
        direction.to_string().to_lowercase(),
    );
    out.push_str(&render_board(view, rotated));
    out.push_str("\n\n");

    for (step, item) in view.checklist.iter().enumerate() {
        let mark = if item.done { "x" } else { " " };
        out.push_str(&format!("[{}] {}. {}\n", mark, step + 1, item.text));
    }

    let controls = [
        ("rotate", view.controls.rotate),
        ("attack", view.controls.attack),
        ("end", view.controls.end_turn),
        ("reset", view.controls.reset),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| enabled.then_some(name))
    .collect::<Vec<_>>()
    .join(", ");
    out.push_str(&format!("Controls: {}\n", controls));

    if let Some(banner) = view.banner() {
        out.push_str(&format!("\n{}\n", banner));
    }
    out
}
