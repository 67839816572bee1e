use bugworld_lib::model::cell::{descending_food_order, HabitatCell};
use bugworld_lib::model::error::ModelError;
use bugworld_lib::model::grid::{free_grid_cells, random_element_of, GridCell, GridPoint};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn test_free_grid_cells_empty_input_yields_empty_output() {
    let neighborhood: Vec<GridCell<&str>> = Vec::new();
    assert!(free_grid_cells(&neighborhood).is_empty());
}

#[test]
fn test_free_grid_cells_keeps_all_free_cells_in_order() {
    let neighborhood: Vec<GridCell<&str>> = vec![
        GridCell::empty(GridPoint::new(1, 1)),
        GridCell::empty(GridPoint::new(2, 2)),
    ];

    let free = free_grid_cells(&neighborhood);
    assert_eq!(free.len(), 2);
    assert_eq!(free[0].point(), GridPoint::new(1, 1));
    assert_eq!(free[1].point(), GridPoint::new(2, 2));
}

#[test]
fn test_free_grid_cells_filters_occupied_cells() {
    let neighborhood = vec![
        GridCell::empty(GridPoint::new(1, 1)),
        GridCell::with_items(GridPoint::new(2, 2), vec!["B"]),
    ];

    let free = free_grid_cells(&neighborhood);
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].point(), GridPoint::new(1, 1));
}

#[test]
fn test_free_grid_cells_all_occupied_yields_empty() {
    let neighborhood = vec![
        GridCell::with_items(GridPoint::new(1, 1), vec!["A"]),
        GridCell::with_items(GridPoint::new(2, 2), vec!["B"]),
    ];

    assert!(free_grid_cells(&neighborhood).is_empty());
}

#[test]
fn test_free_grid_cells_does_not_mutate_input() {
    let neighborhood = vec![
        GridCell::empty(GridPoint::new(0, 0)),
        GridCell::with_items(GridPoint::new(1, 0), vec!["A"]),
    ];

    let _ = free_grid_cells(&neighborhood);
    assert_eq!(neighborhood.len(), 2);
    assert!(neighborhood[0].is_free());
    assert!(!neighborhood[1].is_free());
}

#[test]
fn test_random_element_of_empty_list_fails() {
    let empty: Vec<i32> = Vec::new();
    assert!(matches!(
        random_element_of(&empty, &mut rng()),
        Err(ModelError::EmptySelection)
    ));
}

#[test]
fn test_random_element_of_singleton() {
    let list = vec!["A"];
    assert_eq!(*random_element_of(&list, &mut rng()).unwrap(), "A");
}

#[test]
fn test_random_element_of_picks_a_member() {
    let list = vec!["A", "B", "C", "D", "E"];
    let mut rng = rng();

    for _ in 0..50 {
        let picked = random_element_of(&list, &mut rng).unwrap();
        assert!(list.contains(picked));
    }
    assert_eq!(list, vec!["A", "B", "C", "D", "E"]);
}

fn cell_with_food(x: i32, y: i32, food: f64) -> GridCell<HabitatCell> {
    let mut cell = HabitatCell::new(x, y).unwrap();
    cell.set_food_availability(food).unwrap();
    GridCell::with_items(GridPoint::new(x, y), vec![cell])
}

#[test]
fn test_descending_food_order_sorts_richest_first() {
    let mut cells = vec![
        cell_with_food(0, 0, 1.0),
        cell_with_food(1, 0, 3.0),
        cell_with_food(2, 0, 2.0),
    ];

    cells.sort_by(descending_food_order);

    let foods: Vec<f64> = cells
        .iter()
        .map(|gc| gc.items()[0].food_availability())
        .collect();
    assert_eq!(foods, vec![3.0, 2.0, 1.0]);
}

#[test]
fn test_descending_food_order_equal_food_is_equal() {
    let a = cell_with_food(0, 0, 2.0);
    let b = cell_with_food(5, 5, 2.0);
    assert_eq!(descending_food_order(&a, &b), std::cmp::Ordering::Equal);
}
