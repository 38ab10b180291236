use broadside::{BitGrid, GridError};

#[test]
fn test_set_get_clear() {
    let mut grid = BitGrid::<10>::new();
    assert!(!grid.get(3, 4).unwrap());
    grid.set(3, 4).unwrap();
    assert!(grid.get(3, 4).unwrap());
    grid.clear(3, 4).unwrap();
    assert!(!grid.get(3, 4).unwrap());
}

#[test]
fn test_out_of_bounds() {
    let mut grid = BitGrid::<10>::new();
    assert_eq!(
        grid.get(10, 0).unwrap_err(),
        GridError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        grid.set(0, 10).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn test_count_and_empty() {
    let mut grid = BitGrid::<10>::new();
    assert!(grid.is_empty());
    assert_eq!(grid.count_ones(), 0);
    grid.set(0, 0).unwrap();
    grid.set(9, 9).unwrap();
    assert!(!grid.is_empty());
    assert_eq!(grid.count_ones(), 2);
}

#[test]
fn test_bit_operators() {
    let mut a = BitGrid::<10>::new();
    let mut b = BitGrid::<10>::new();
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    b.set(1, 1).unwrap();
    b.set(2, 2).unwrap();

    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
    // inversion stays within the 10x10 footprint
    assert_eq!((!a).count_ones(), 98);
    assert_eq!((!BitGrid::<10>::new()).count_ones(), 100);
}

#[test]
fn test_covers() {
    let mut big = BitGrid::<10>::new();
    let mut small = BitGrid::<10>::new();
    big.set(4, 4).unwrap();
    big.set(4, 5).unwrap();
    small.set(4, 4).unwrap();
    assert!(big.covers(small));
    assert!(!small.covers(big));
    assert!(big.covers(BitGrid::<10>::new()));
}

#[test]
fn test_iter_set_row_major() {
    let mut grid = BitGrid::<10>::new();
    grid.set(5, 1).unwrap();
    grid.set(0, 3).unwrap();
    grid.set(5, 0).unwrap();
    let cells: Vec<_> = grid.iter_set().collect();
    assert_eq!(cells, vec![(0, 3), (5, 0), (5, 1)]);
}

#[test]
fn test_try_new_rejects_oversized_grid() {
    assert!(BitGrid::<10>::try_new().is_ok());
    assert_eq!(
        BitGrid::<12>::try_new().unwrap_err(),
        GridError::SizeTooLarge {
            cells: 144,
            capacity: 128
        }
    );
}
