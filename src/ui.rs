#![cfg(feature = "std")]

use crate::grid::Grid;
use crate::probability::ProbabilityMap;
use crate::tile::Tile;

fn print_header(size: usize, width: usize) {
    std::print!("   ");
    for c in 0..size {
        let ch = (b'A' + (c % 26) as u8) as char;
        std::print!(" {:>width$}", ch, width = width);
    }
    std::println!();
}

/// Print the observed tiles of one side.
pub fn print_tiles(tiles: &Grid<Tile>) {
    let size = tiles.size();
    print_header(size, 1);
    for r in 0..size {
        std::print!("{:2} ", r + 1);
        for c in tiles.as_slice()[r * size..(r + 1) * size].iter() {
            std::print!(" {}", c);
        }
        std::println!();
    }
}

/// Print a layer of a probability map scaled by its largest ship value.
pub fn print_probability_map(map: &ProbabilityMap, index: usize) {
    let size = map.map_size();
    std::println!("\nProbability distribution:");
    print_header(size, 4);
    for r in 0..size {
        std::print!("{:2} ", r + 1);
        for c in 0..size {
            let coord = crate::grid::Coord::new(c as i32, r as i32);
            std::print!(" {:4.2}", map.normalized(index, coord));
        }
        std::println!();
    }
}

/// Print raw counters, e.g. cluster sizes.
pub fn print_counts(values: &Grid<u32>) {
    let size = values.size();
    print_header(size, 3);
    for r in 0..size {
        std::print!("{:2} ", r + 1);
        for v in values.as_slice()[r * size..(r + 1) * size].iter() {
            std::print!(" {:>3}", v);
        }
        std::println!();
    }
}
