use std::io::{self, Read};

/// Drop one trailing `\n` or `\r\n`
pub fn strip_line_terminator(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

/// Read all of `reader` as the payload
pub fn read_payload<R: Read>(mut reader: R) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let len = strip_line_terminator(&buf).len();
    buf.truncate(len);
    Ok(buf)
}
