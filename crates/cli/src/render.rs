//! Bar rendering for the terminal presenter.

use colored::{ColoredString, Colorize};
use sortlab_core::{Step, MAX_HEIGHT};

/// Visual role of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Partition,
    Pivot,
    Comparing,
    Swapping,
    Sorted,
    Plain,
}

/// Role of `index` in `step`. Partition wins over pivot, pivot over
/// comparing, and so on down to sorted.
pub fn role_of(index: usize, step: &Step) -> Role {
    if step.partition.contains(&index) {
        Role::Partition
    } else if step.pivot == Some(index) {
        Role::Pivot
    } else if step.comparing.contains(&index) {
        Role::Comparing
    } else if step.swapping.contains(&index) {
        Role::Swapping
    } else if step.sorted.contains(&index) {
        Role::Sorted
    } else {
        Role::Plain
    }
}

/// Width of the bar for `value`, scaled into `max_width` columns. Every
/// bar is at least one column wide so small values stay visible.
pub fn bar_width(value: u32, max_width: usize) -> usize {
    ((value as usize * max_width) / MAX_HEIGHT as usize).max(1)
}

pub fn paint(bar: &str, role: Role) -> ColoredString {
    match role {
        Role::Partition => bar.blue(),
        Role::Pivot => bar.yellow(),
        Role::Comparing => bar.cyan(),
        Role::Swapping => bar.red(),
        Role::Sorted => bar.green(),
        Role::Plain => bar.normal(),
    }
}
