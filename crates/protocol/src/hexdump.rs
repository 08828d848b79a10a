//! Hex-editor style formatting of packet buffers.

use std::fmt::{self, Write};

const HEADER: &str = "        0  1  2  3  4  5  6  7   8  9  A  B  C  D  E  F";
const RULER: &str = "       -- -- -- -- -- -- -- --  -- -- -- -- -- -- -- --";
const ROW_WIDTH: usize = 16;

/// Format the whole buffer.
pub fn format_buffer(buffer: &[u8]) -> String {
    format_buffer_len(buffer, buffer.len())
}

/// Format the first `length` bytes of the buffer.
pub fn format_buffer_len(buffer: &[u8], length: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_buffer(&mut out, buffer, length);
    out
}

/// Write the hex view of the first `length` bytes to `out`.
///
/// `length` is clamped to the buffer size. Printable ASCII (0x20..0x80)
/// is echoed in the right column; all other bytes show as `.`.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &[u8], length: usize) -> fmt::Result {
    let length = length.min(buffer.len());
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{RULER}")?;

    for (row, chunk) in buffer[..length].chunks(ROW_WIDTH).enumerate() {
        write!(out, "{:04X}   ", row * ROW_WIDTH)?;

        for j in 0..ROW_WIDTH {
            match chunk.get(j) {
                Some(b) => {
                    write!(out, "{b:02X}")?;
                    out.write_str(if j == 7 { "  " } else { " " })?;
                }
                None => out.write_str("   ")?,
            }
        }

        out.write_str("  ")?;
        for &b in chunk {
            out.write_char(if (0x20..0x80).contains(&b) { b as char } else { '.' })?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}
