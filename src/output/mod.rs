//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_bench_statistics, print_game_summary, print_solve_result,
};
