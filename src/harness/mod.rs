//! Interactive explorer: prompts for inputs, runs each algorithm once and prints the result.
//!
//! Input is read as whitespace-separated tokens, so values may be given one per line or all at
//! once. A token that does not parse is consumed and reported, and the session moves on to the
//! next section. End of input ends the session early.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::core::RowMatrix;
use crate::error::{AlgoError, Result};
use crate::{matrix, scalar, search, solver};

enum Stop {
    Malformed,
    Eof,
    Io(io::Error),
}

impl From<io::Error> for Stop {
    fn from(e: io::Error) -> Self {
        Stop::Io(e)
    }
}

type Step = std::result::Result<(), Stop>;

fn describe(e: &AlgoError) -> String {
    match e {
        AlgoError::InvalidArgument(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Console session over any line-oriented input and output.
pub struct Explorer<R, W> {
    input: R,
    out: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out, pending: VecDeque::new() }
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Walk through every section in order.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Algorithm Explorer!")?;
        let sections: [(&str, &str, fn(&mut Self) -> Step); 8] = [
            ("Recursive Count Binary Digits", "Please enter an integer.", Self::digits_recursive),
            ("Iterative Count Binary Digits", "Please enter an integer.", Self::digits_iterative),
            ("Recursive Factorial", "Please enter an integer.", Self::factorial),
            ("Matrix Multiplication", "Please enter numbers for matrix elements.", Self::multiply),
            ("Sequential Search", "Please enter integers.", Self::search),
            ("Find Max Element", "Please enter numbers.", Self::max_element),
            ("Has Unique Elements", "Please enter integers.", Self::unique),
            (
                "Gaussian Elimination",
                "Please enter numbers for matrix dimensions and elements.",
                Self::eliminate,
            ),
        ];
        for (title, hint, body) in sections {
            writeln!(self.out, "\n--- {title} ---")?;
            match body(self) {
                Ok(()) => {}
                Err(Stop::Malformed) => writeln!(self.out, "Invalid input. {hint}")?,
                Err(Stop::Eof) => {
                    writeln!(self.out, "\nEnd of input.")?;
                    return Ok(());
                }
                Err(Stop::Io(e)) => return Err(e.into()),
            }
        }
        writeln!(self.out, "\nAlgorithm exploration complete!")?;
        Ok(())
    }

    fn next_token(&mut self) -> std::result::Result<String, Stop> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Stop::Eof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front().ok_or(Stop::Eof)
    }

    fn read<T: FromStr>(&mut self, prompt: &str) -> std::result::Result<T, Stop> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.next_token()?.parse().map_err(|_| Stop::Malformed)
    }

    /// Reads a count; `None` (after printing `what must be positive`) when it is not.
    fn read_positive(&mut self, prompt: &str, what: &str) -> std::result::Result<Option<usize>, Stop> {
        let n: i64 = self.read(prompt)?;
        match usize::try_from(n) {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => {
                writeln!(self.out, "Error: {what} must be positive.")?;
                Ok(None)
            }
        }
    }

    fn read_elements<T: FromStr>(&mut self, n: usize, kind: &str) -> std::result::Result<Vec<T>, Stop> {
        writeln!(self.out, "Enter {n} {kind} elements for the array:")?;
        (1..=n).map(|i| self.read(&format!("Element {i}: "))).collect()
    }

    fn read_matrix(&mut self, name: &str, rows: usize, cols: usize) -> std::result::Result<RowMatrix<f64>, Stop> {
        let mut m = vec![vec![0.0; cols]; rows];
        for i in 0..rows {
            for j in 0..cols {
                m[i][j] = self.read(&format!("{name}[{i}][{j}]: "))?;
            }
        }
        Ok(m)
    }

    fn print_rows<T: Debug>(&mut self, m: &[Vec<T>]) -> io::Result<()> {
        for row in m {
            writeln!(self.out, "{row:?}")?;
        }
        Ok(())
    }

    fn print_error(&mut self, e: &AlgoError) -> io::Result<()> {
        writeln!(self.out, "Error: {}", describe(e))
    }

    fn digits_recursive(&mut self) -> Step {
        let n: i64 = self.read("Enter a positive integer (for recursive binary digit count): ")?;
        match scalar::count_binary_digits_recursive(n) {
            Ok(d) => {
                writeln!(self.out, "Binary digits in {n}: {d}")?;
                writeln!(self.out, "Time Complexity: O(log n)")?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn digits_iterative(&mut self) -> Step {
        let n: i64 = self.read("Enter a positive integer (for iterative binary digit count): ")?;
        match scalar::count_binary_digits(n) {
            Ok(d) => {
                writeln!(self.out, "Binary digits in {n}: {d}")?;
                writeln!(self.out, "Time Complexity: O(log n)")?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn factorial(&mut self) -> Step {
        let n: i32 = self.read("Enter a non-negative integer (for factorial): ")?;
        match scalar::checked_factorial(n) {
            Ok(Some(v)) => writeln!(self.out, "Factorial of {n}: {v}")?,
            Ok(None) => {
                let wrapped = scalar::factorial(n).map_err(|e| Stop::Io(io::Error::other(e)))?;
                writeln!(self.out, "Factorial of {n}: {wrapped} (exceeds 64 bits, value wrapped)")?;
            }
            Err(e) => {
                self.print_error(&e)?;
                return Ok(());
            }
        }
        writeln!(self.out, "Time Complexity: O(n)")?;
        Ok(())
    }

    fn multiply(&mut self) -> Step {
        let Some(dim) = self.read_positive("Enter the dimension N for N x N matrices (e.g., 2 for 2x2): ", "Dimension")?
        else {
            return Ok(());
        };
        writeln!(self.out, "Enter elements for Matrix A ({dim}x{dim}):")?;
        let a = self.read_matrix("A", dim, dim)?;
        writeln!(self.out, "Enter elements for Matrix B ({dim}x{dim}):")?;
        let b = self.read_matrix("B", dim, dim)?;
        match matrix::multiply(&a, &b) {
            Ok(c) => {
                writeln!(self.out, "Result of matrix multiplication:")?;
                self.print_rows(&c)?;
                writeln!(self.out, "Time Complexity: O(N^3)")?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Step {
        let Some(n) = self.read_positive("Enter the size of the array: ", "Array size")? else {
            return Ok(());
        };
        let arr: Vec<i32> = self.read_elements(n, "integer")?;
        let key: i32 = self.read("Enter the key to search for: ")?;
        match search::sequential_search(&arr, &key) {
            Some(i) => writeln!(self.out, "Key {key} found at index: {i}")?,
            None => writeln!(self.out, "Key {key} not found in the array.")?,
        }
        writeln!(self.out, "Time Complexity: O(N) (Worst Case)")?;
        Ok(())
    }

    fn max_element(&mut self) -> Step {
        let Some(n) = self.read_positive("Enter the size of the double array: ", "Array size")? else {
            return Ok(());
        };
        let arr: Vec<f64> = self.read_elements(n, "double")?;
        match search::find_max_element(&arr) {
            Ok(v) => {
                writeln!(self.out, "Max element: {v:?}")?;
                writeln!(self.out, "Time Complexity: O(N)")?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn unique(&mut self) -> Step {
        let Some(n) = self.read_positive("Enter the size of the integer array: ", "Array size")? else {
            return Ok(());
        };
        let arr: Vec<i32> = self.read_elements(n, "integer")?;
        writeln!(self.out, "Has unique elements: {}", search::has_unique_elements(&arr))?;
        writeln!(self.out, "Time Complexity: O(N^2)")?;
        Ok(())
    }

    fn eliminate(&mut self) -> Step {
        let rows: i64 = self.read("Enter the number of rows (N) for the matrix: ")?;
        let cols: i64 =
            self.read("Enter the number of columns (M) for the matrix (N for square, N+1 for augmented): ")?;
        let (Ok(rows), Ok(cols)) = (usize::try_from(rows), usize::try_from(cols)) else {
            writeln!(self.out, "Error: Matrix dimensions must be positive.")?;
            return Ok(());
        };
        if rows == 0 || cols == 0 {
            writeln!(self.out, "Error: Matrix dimensions must be positive.")?;
            return Ok(());
        }
        writeln!(self.out, "Enter elements for the {rows}x{cols} matrix:")?;
        let mut m = self.read_matrix("Matrix", rows, cols)?;
        writeln!(self.out, "Original Matrix:")?;
        self.print_rows(&m)?;
        match solver::gaussian_elimination(&mut m) {
            Ok(report) => {
                for advisory in &report.advisories {
                    writeln!(self.out, "Warning: {advisory}")?;
                }
                writeln!(self.out, "Matrix after Gaussian Elimination:")?;
                self.print_rows(&m)?;
                writeln!(self.out, "Time Complexity: O(N^3) (where N is the number of rows)")?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut explorer = Explorer::new(input.as_bytes(), Vec::new());
        explorer.run().unwrap();
        String::from_utf8(explorer.into_output()).unwrap()
    }

    #[test]
    fn full_session() {
        let input = "8\n1023\n5\n2\n1 2 3 4\n5 6 7 8\n5\n3 1 4 1 5\n1\n3\n1.0 5.5 -2.0\n3\n1 2 2\n2 2\n2 4 1 3\n";
        let out = session(input);
        assert!(out.contains("Binary digits in 8: 4"));
        assert!(out.contains("Binary digits in 1023: 10"));
        assert!(out.contains("Factorial of 5: 120"));
        assert!(out.contains("[19.0, 22.0]"));
        assert!(out.contains("[43.0, 50.0]"));
        assert!(out.contains("Key 1 found at index: 1"));
        assert!(out.contains("Max element: 5.5"));
        assert!(out.contains("Has unique elements: false"));
        assert!(out.contains("Matrix after Gaussian Elimination:\n[2.0, 4.0]\n[0.0, 1.0]\n"));
        assert!(out.ends_with("Algorithm exploration complete!\n"));
    }

    #[test]
    fn invalid_argument_and_malformed_tokens() {
        let input = "0\nabc\n-1\n0\n";
        let out = session(input);
        assert!(out.contains("Error: positive input only"));
        assert!(out.contains("Invalid input. Please enter an integer."));
        assert!(out.contains("Error: non-negative input only"));
        assert!(out.contains("Error: Dimension must be positive."));
        assert!(out.ends_with("End of input.\n"));
    }

    #[test]
    fn zero_pivot_is_reported_as_warning() {
        let input = "1\n1\n0\n0\n0\n0\n0\n2 2\n0 1\n0 2\n";
        let out = session(input);
        assert!(out.contains("Warning: zero pivot at row 0, column 0"));
        assert!(out.contains("Matrix after Gaussian Elimination:\n[0.0, 1.0]\n[0.0, 2.0]\n"));
    }

    #[test]
    fn overflowing_factorial_is_flagged() {
        let out = session("1\n1\n21\n");
        assert!(out.contains("Factorial of 21: -4249290049419214848 (exceeds 64 bits, value wrapped)"));
    }
}
