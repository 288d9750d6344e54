//! Layout module - byte widths and buffer growth.
//!
//! This module answers the two questions every write asks before touching
//! bytes:
//! - How wide is the value? ([`width_of`], [`size_of_str`])
//! - Is the buffer long enough, and if not, grow it ([`ensure_capacity`])
//!
//! Offsets and lengths are bounded by [`MAX_BUFFER_LEN`] (65535).

mod grow;
mod size_table;

pub use grow::{ensure_capacity, new_buffer};
pub use size_table::{
    checked_end, size_of_str, width_of, width_of_name, MAX_BUFFER_LEN, STRING_PREFIX_WIDTH,
};
