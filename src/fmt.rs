use std::fmt;

use crate::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as u32;
        let width = (n * n - 1).to_string().len();
        writeln!(f, "{}", self.size)?;
        for (pos, tile) in self.cells() {
            write!(f, "{tile:>width$} ")?;
            if pos.1 + 1 == self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
