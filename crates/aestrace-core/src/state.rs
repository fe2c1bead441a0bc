//! The column-major state matrix and the fixed-size buffer types.

/// Four bytes, the atomic unit of the key schedule and of row/column slices.
pub type Word = [u8; 4];

/// A 16-byte block as handed to and returned by the engine.
pub type Block = [u8; 16];

/// The 4x4 byte matrix the round transforms operate on.
///
/// Indexed `[row][col]`. A block fills it column-major, so the byte at
/// textual position `4 * col + row` lands in cell `(row, col)` as FIPS-197
/// lays out the state. Always exactly 16 bytes; mutated in place by the
/// round transforms and owned by the engine for one encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Loads a block into the state, transposing into column-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut cells = [[0u8; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                cells[row][col] = block[4 * col + row];
            }
        }
        Self(cells)
    }

    /// Reads the state back out in the block's textual byte order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for col in 0..4 {
            for row in 0..4 {
                block[4 * col + row] = self.0[row][col];
            }
        }
        block
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Overwrites the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[row][col] = value;
    }

    /// Copies out one row.
    #[inline]
    pub fn row(&self, row: usize) -> Word {
        self.0[row]
    }

    /// Overwrites one row.
    #[inline]
    pub fn set_row(&mut self, row: usize, word: Word) {
        self.0[row] = word;
    }

    /// Copies out one column as a word.
    #[inline]
    pub fn column(&self, col: usize) -> Word {
        [
            self.0[0][col],
            self.0[1][col],
            self.0[2][col],
            self.0[3][col],
        ]
    }

    /// Overwrites one column from a word.
    #[inline]
    pub fn set_column(&mut self, col: usize, word: Word) {
        for (row, byte) in word.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_transposes_and_read_undoes_it() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        // Textual position 4*col + row: byte 1 is row 1 of column 0.
        assert_eq!(state.get(1, 0), 1);
        assert_eq!(state.get(0, 1), 4);
        assert_eq!(state.get(3, 3), 15);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn column_accessors_agree_with_cells() {
        let block: Block = core::array::from_fn(|i| (i * 3) as u8);
        let mut state = State::from_block(&block);
        assert_eq!(state.column(2), [24, 27, 30, 33]);
        state.set_column(2, [1, 2, 3, 4]);
        assert_eq!(state.get(0, 2), 1);
        assert_eq!(state.get(3, 2), 4);
    }
}
