//! Plain-text stage preview for the terminal.

use divemark::{Session, SlotFill};

const COLS: usize = 61;
const ROWS: usize = 31;

fn plot(grid: &mut [Vec<char>], row: isize, col: isize, ch: char) {
    if (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col) {
        grid[row as usize][col as usize] = ch;
    }
}

/// Renders the session onto a character grid: the arena outline as dots,
/// slots as hex digits (parenthesized when picked as dragons), marks as
/// `1`..`3` and the stage center as `+`.
pub fn draw_stage(session: &Session) -> String {
    let spec = session.spec();
    let scale_x = spec.stage_size() / (COLS - 1) as f64;
    let scale_y = spec.stage_size() / (ROWS - 1) as f64;
    let to_cell = |x: f64, y: f64| ((y / scale_y).round() as isize, (x / scale_x).round() as isize);

    let mut grid = vec![vec![' '; COLS]; ROWS];

    for step in 0..120 {
        let theta = step as f64 * std::f64::consts::TAU / 120.0;
        let x = spec.center().x + spec.arena_radius() * theta.sin();
        let y = spec.center().y - spec.arena_radius() * theta.cos();
        let (row, col) = to_cell(x, y);
        plot(&mut grid, row, col, '.');
    }

    let (row, col) = to_cell(spec.center().x, spec.center().y);
    plot(&mut grid, row, col, '+');

    for index in 0..spec.slot_count() {
        let slot = spec.slot_center(index);
        let (row, col) = to_cell(slot.x, slot.y);
        if let Some(digit) = char::from_digit(index as u32, 16) {
            plot(&mut grid, row, col, digit);
        }
        if session.fill(index, None) == SlotFill::Selected {
            plot(&mut grid, row, col - 1, '(');
            plot(&mut grid, row, col + 1, ')');
        }
    }

    // marks draw last so they win shared cells
    for (index, label) in ['1', '2', '3'].into_iter().enumerate() {
        let mark = session.mark_position(index);
        let (row, col) = to_cell(mark.x, mark.y);
        plot(&mut grid, row, col, label);
    }

    let mut out = String::new();
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use divemark::ArenaVariant;

    #[test]
    fn picked_slots_are_parenthesized() {
        let mut session = Session::new(ArenaVariant::Eight);
        session.slot_clicked(0);

        let stage = draw_stage(&session);
        assert!(stage.contains("(0)"));
        assert!(!stage.contains("(1)"));
        assert!(stage.contains('4'));
    }

    #[test]
    fn home_row_marks_line_up_through_the_center() {
        let session = Session::new(ArenaVariant::Eight);
        let stage = draw_stage(&session);

        let center_row = stage.lines().nth(ROWS / 2).unwrap();
        assert!(center_row.contains("1  2  3"));
    }

    #[test]
    fn twelve_slot_rings_use_hex_digits() {
        let session = Session::new(ArenaVariant::Twelve);
        let stage = draw_stage(&session);
        assert!(stage.contains('a'));
        assert!(stage.contains('b'));
    }
}
