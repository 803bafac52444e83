use std::io::{self, Write};

use bairstow_core::{Polynomial, Root};
use bairstow_solvers::roots::lin_bairstow::Solution;

/// Writes the polynomial and its roots in the classic text layout.
///
/// A conjugate pair is written as two lines, `re + imi` then `re - imi`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(
    out: &mut W,
    polynomial: &Polynomial,
    solution: &Solution,
) -> io::Result<()> {
    writeln!(out, "The polynomial is:")?;
    writeln!(out, "{polynomial}")?;
    writeln!(out)?;

    for root in &solution.roots {
        match *root {
            Root::Real(r) => writeln!(out, "{r}")?,
            Root::ComplexPair { re, im } => {
                writeln!(out, "{re} + {im}i")?;
                writeln!(out, "{re} - {im}i")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Root finding process has finished.")
}

#[cfg(test)]
mod tests {
    use super::*;

    use bairstow_solvers::roots::lin_bairstow::{Config, solve_unobserved};

    fn report(coefficients: &[f64]) -> String {
        let polynomial = Polynomial::new(coefficients).expect("valid polynomial");
        let solution =
            solve_unobserved(&polynomial, &Config::default()).expect("should converge");

        let mut out = Vec::new();
        write_report(&mut out, &polynomial, &solution).expect("writing to a Vec");
        String::from_utf8(out).expect("report is UTF-8")
    }

    #[test]
    fn real_roots_one_per_line() {
        assert_eq!(
            report(&[-6.0, -1.0, 1.0]),
            "The polynomial is:\n\
             1*x^2 - 1*x - 6\n\
             \n\
             3\n\
             -2\n\
             \n\
             Root finding process has finished.\n"
        );
    }

    #[test]
    fn conjugate_pair_takes_two_lines() {
        // x² + 2x + 5 has roots −1 ± 2i.
        assert_eq!(
            report(&[5.0, 2.0, 1.0]),
            "The polynomial is:\n\
             1*x^2 + 2*x + 5\n\
             \n\
             -1 + 2i\n\
             -1 - 2i\n\
             \n\
             Root finding process has finished.\n"
        );
    }

    #[test]
    fn every_root_is_listed() {
        let text = report(&[1.0, 3.0, 1.0, 2.0, 4.0]);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "The polynomial is:");
        assert_eq!(lines[1], "4*x^4 + 2*x^3 + 1*x^2 + 3*x + 1");
        assert_eq!(lines[2], "");

        // Four root lines, then the blank line and trailer.
        assert_eq!(lines.len(), 3 + 4 + 2);
        assert_eq!(lines[lines.len() - 1], "Root finding process has finished.");
    }
}
