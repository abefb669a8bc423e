//! Small I/O helpers shared by interactive commands.

use std::io::BufRead;

/// Read one trimmed line; `None` on EOF or read error.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_then_none_at_eof() {
        let mut input = Cursor::new(b"  hit \nstand\n".to_vec());
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("hit"));
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("stand"));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}
