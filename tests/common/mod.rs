//! Common fixtures for integration tests.
//!
//! Each test binary only uses part of this module.
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use ratatui::buffer::Buffer;

/// Text of one buffer row.
pub fn buffer_row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| {
            buf.cell((buf.area.x + x, y))
                .map(|c| c.symbol().to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Text of the whole buffer, one line per row.
pub fn buffer_text(buf: &Buffer) -> String {
    (buf.area.y..buf.area.bottom())
        .map(|y| buffer_row(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
