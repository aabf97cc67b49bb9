use conway::{Driver, Grid, LifeError};

fn set_cells(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        grid.set(row, col, true).unwrap();
    }
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(grid.is_alive(row, col), "expected alive at ({row},{col})");
    }
}

fn assert_dead(grid: &Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(!grid.is_alive(row, col), "expected dead at ({row},{col})");
    }
}

fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
    grid.living_cells().iter().map(|c| (c.row(), c.col())).collect()
}

fn driver_with(width: i64, height: i64, cells: &[(usize, usize)]) -> Driver {
    let mut grid = Grid::new(width, height).unwrap();
    set_cells(&mut grid, cells);
    Driver::new(grid)
}

fn collect_renders(driver: &mut Driver, generations: i64) -> Vec<(u64, String)> {
    let mut renders = Vec::new();
    driver
        .run(generations, |generation, grid| renders.push((generation, grid.to_string())))
        .unwrap();
    renders
}

#[test]
fn live_cell_with_one_neighbour_dies() {
    let mut driver = driver_with(5, 5, &[(2, 2), (2, 3)]);
    driver.advance();
    assert_dead(driver.grid(), &[(2, 2), (2, 3)]);
}

#[test]
fn live_cell_with_two_or_three_neighbours_survives() {
    let mut driver = driver_with(5, 5, &[(1, 1), (1, 2), (2, 1)]);
    driver.advance();
    // Each tromino cell has exactly two neighbours; (2,2) is born with three.
    assert_alive(driver.grid(), &[(1, 1), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn live_cell_with_four_neighbours_dies() {
    // Centre of a plus sign has four live neighbours.
    let mut driver = driver_with(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
    driver.advance();
    assert_dead(driver.grid(), &[(2, 2)]);
}

#[test]
fn dead_cell_with_three_neighbours_is_born() {
    let mut driver = driver_with(5, 5, &[(1, 1), (1, 3), (3, 2)]);
    driver.advance();
    assert_alive(driver.grid(), &[(2, 2)]);
}

#[test]
fn dead_cell_with_other_counts_stays_empty() {
    // (2,2) sees two live neighbours and must stay dead.
    let mut driver = driver_with(5, 5, &[(1, 1), (3, 3)]);
    driver.advance();
    assert_dead(driver.grid(), &[(2, 2)]);
    assert!(live_set(driver.grid()).is_empty());
}

#[test]
fn lone_cell_empties_the_grid_for_good() {
    let mut driver = driver_with(3, 3, &[(1, 1)]);
    let renders = collect_renders(&mut driver, 4);
    let empty = Grid::new(3, 3).unwrap().to_string();
    assert_ne!(renders[0].1, empty);
    for (_, grid) in &renders[1..] {
        assert_eq!(grid, &empty);
    }
}

#[test]
fn block_is_a_still_life() {
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let mut driver = driver_with(4, 4, &block);
    for &(row, col) in &block {
        let cell = driver.grid().cell(row, col).unwrap();
        assert_eq!(driver.grid().living_neighbor_count(cell), 3);
    }

    let renders = collect_renders(&mut driver, 5);
    assert_eq!(renders.len(), 6);
    assert!(renders.iter().all(|(_, grid)| grid == &renders[0].1));
    assert_eq!(live_set(driver.grid()), block.to_vec());
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = [(2, 1), (2, 2), (2, 3)];
    let vertical = [(1, 2), (2, 2), (3, 2)];
    let mut driver = driver_with(5, 5, &horizontal);

    driver.advance();
    assert_eq!(live_set(driver.grid()), vertical.to_vec());

    driver.advance();
    assert_eq!(live_set(driver.grid()), horizontal.to_vec());
    assert_eq!(driver.generation(), 2);
}

#[test]
fn run_zero_renders_only_the_initial_grid() {
    let mut driver = driver_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let initial = driver.grid().to_string();
    let renders = collect_renders(&mut driver, 0);
    assert_eq!(renders, vec![(0, initial)]);
    assert_eq!(driver.generation(), 0);
}

#[test]
fn run_renders_each_generation_in_order() {
    let mut driver = driver_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let renders = collect_renders(&mut driver, 3);
    let generations: Vec<u64> = renders.iter().map(|(g, _)| *g).collect();
    assert_eq!(generations, vec![0, 1, 2, 3]);
    assert_eq!(renders[0].1, renders[2].1);
    assert_eq!(renders[1].1, renders[3].1);
    assert_ne!(renders[0].1, renders[1].1);
}

#[test]
fn corner_cells_only_see_three_positions() {
    let mut driver = driver_with(3, 3, &[(0, 1), (1, 0), (1, 1)]);
    driver.advance();
    // (0,0) had three neighbours and is born; nothing wraps to (2,2).
    assert_alive(driver.grid(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_dead(driver.grid(), &[(2, 2), (0, 2), (2, 0)]);
}

#[test]
fn seeded_grids_evolve_identically() {
    let mut a = Grid::new(20, 15).unwrap();
    let mut b = Grid::new(20, 15).unwrap();
    a.populate_seeded(2024);
    b.populate_seeded(2024);
    let left = collect_renders(&mut Driver::new(a), 25);
    let right = collect_renders(&mut Driver::new(b), 25);
    assert_eq!(left, right);
}

#[test]
fn bad_input_is_rejected() {
    assert!(matches!(Grid::new(-3, 4), Err(LifeError::InvalidDimension { value: -3, .. })));
    let mut driver = driver_with(2, 2, &[]);
    assert_eq!(
        driver.run(-5, |_, _| panic!("nothing should render")),
        Err(LifeError::InvalidGenerationCount(-5))
    );
}
