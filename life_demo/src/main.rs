// main.rs - Console demo: seed a small grid and print a few generations

use life::{Cell, Grid};

const GENERATIONS: u32 = 5;

fn main() -> Result<(), life::Error> {
    let mut grid = Grid::dead(5, 5);
    for &(row, col) in &[(1, 3), (2, 2), (2, 3), (3, 3)] {
        grid.set(row, col, Cell::Live);
    }

    print!("{grid}");
    for _ in 0..GENERATIONS {
        grid = grid.next_generation()?;
        println!();
        print!("{grid}");
    }
    Ok(())
}
