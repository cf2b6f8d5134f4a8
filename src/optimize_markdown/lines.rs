//! Line splitting that keeps terminators attached, so a split followed by a
//! join reproduces the input byte for byte.

/// Splits `content` after every `\n`. A trailing fragment without a newline
/// is returned as its own line. `\r\n` endings stay intact since `\r` is part
/// of the line body.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|b| *b == b'\n').collect()
}

pub fn join_lines(lines: &[&[u8]]) -> Vec<u8> {
    lines.concat()
}
