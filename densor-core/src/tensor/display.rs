use std::fmt;

use super::Tensor;

impl fmt::Display for Tensor {
    /// Matrices print one bracketed row per line; every other rank prints
    /// the flat row-major buffer on a single line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tensor shape: {}", self.shape())?;

        if let &[_, cols] = self.dims() {
            for row in self.data().chunks(cols) {
                write!(f, "[ ")?;
                for (c, v) in row.iter().enumerate() {
                    let sep = if c + 1 < cols { ", " } else { " " };
                    write!(f, "{v}{sep}")?;
                }
                writeln!(f, "]")?;
            }
            return Ok(());
        }

        write!(f, "Data (flat): ")?;
        let data = self.data();
        for (i, v) in data.iter().enumerate() {
            let sep = if i + 1 < data.len() { ", " } else { "\n" };
            write!(f, "{v}{sep}")?;
        }
        Ok(())
    }
}

impl Tensor {
    /// Write the diagnostic rendering to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}
