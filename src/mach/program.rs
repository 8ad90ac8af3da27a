use super::Address;

/// ## Immutable program text
///
/// The source bytes of one Minim program, loaded in full before execution
/// starts and never mutated. The engine reads it by position; there is no
/// token stream and no container format, just bytes.

pub struct Program {
    data: Vec<u8>,
}

impl Program {
    pub fn new(data: Vec<u8>) -> Program {
        Program { data }
    }

    /// Read an entire program from the given source. The source is
    /// consumed to end-of-input so that later interactive reads see only
    /// data arriving after the program text.
    pub fn read(source: &mut dyn std::io::Read) -> std::io::Result<Program> {
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;
        Ok(Program { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<u8> {
        self.data.get(addr).copied()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Position of the first `byte` at or after `start`.
    pub fn find(&self, start: Address, byte: u8) -> Option<Address> {
        self.data[start.min(self.data.len())..]
            .iter()
            .position(|&b| b == byte)
            .map(|off| start + off)
    }

    /// Balanced-delimiter scan. `start` is the position just after an
    /// `open` delimiter; the scan counts nesting and returns the position
    /// of the `close` that balances it, or `None` when the program ends
    /// first. Skipped delimiters are not recorded anywhere.
    pub fn match_delim(&self, start: Address, open: u8, close: u8) -> Option<Address> {
        let mut level = 1usize;
        for (off, &byte) in self.data[start.min(self.data.len())..].iter().enumerate() {
            if byte == open {
                level += 1;
            } else if byte == close {
                level -= 1;
                if level == 0 {
                    return Some(start + off);
                }
            }
        }
        None
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Program {
        Program::new(source.as_bytes().to_vec())
    }
}
