//! Plain-text maze rendering: walls wherever spatial neighbors are not linked.

use delve_core::{Direction, LevelLayout, Pos, TileKind};

fn tile_glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Wall => '#',
        TileKind::Floor => ' ',
        TileKind::Entrance => 'E',
        TileKind::Goal => 'G',
        TileKind::Occupied => '@',
    }
}

pub fn render_ascii(layout: &LevelLayout) -> String {
    let grid = layout.grid();
    let mut out = String::new();

    out.push('+');
    for _ in 0..grid.cols() {
        out.push_str("---+");
    }
    out.push('\n');

    for row in 0..grid.rows() {
        let mut body = String::from("|");
        let mut floor = String::from("+");
        for col in 0..grid.cols() {
            let Some(id) = grid.cell_at(row, col) else {
                continue;
            };
            let cell = grid.cell(id);

            body.push(' ');
            body.push(tile_glyph(layout.tile_at(Pos::new(row, col))));
            body.push(' ');
            body.push(if cell.is_linked_toward(Direction::East) { ' ' } else { '|' });

            floor.push_str(if cell.is_linked_toward(Direction::South) { "   " } else { "---" });
            floor.push('+');
        }
        out.push_str(&body);
        out.push('\n');
        out.push_str(&floor);
        out.push('\n');
    }

    out
}
