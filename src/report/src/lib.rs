use {
    checker::is_prime,
    derive_more::Display,
    std::{io::Write, ops::RangeInclusive},
};

pub const RANGE: RangeInclusive<i64> = 1..=11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display("is prime")]
    Prime,
    #[display("is not prime")]
    NotPrime,
}

impl From<bool> for Verdict {
    fn from(prime: bool) -> Self {
        if prime {
            Verdict::Prime
        } else {
            Verdict::NotPrime
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{n} {verdict}")]
pub struct Line {
    pub n: i64,
    pub verdict: Verdict,
}

impl From<i64> for Line {
    fn from(n: i64) -> Self {
        Line {
            n,
            verdict: Verdict::from(is_prime(n)),
        }
    }
}

/// Checks every integer in [`RANGE`], smallest first.
pub fn lines() -> impl Iterator<Item = Line> {
    RANGE.map(Line::from)
}

pub fn write_report(
    out: &mut impl Write,
    lines: impl IntoIterator<Item = Line>,
) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
