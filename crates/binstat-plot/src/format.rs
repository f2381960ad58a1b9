//! Number formatting for cell annotations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// How a heatmap value is rendered as text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// `1.2e+03` with the given number of decimals
    Scientific(usize),
    /// `1234.57` with the given number of decimals
    Fixed(usize),
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Scientific(1)
    }
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        match *self {
            ValueFormat::Fixed(precision) => format!("{:.*}", precision, value),
            ValueFormat::Scientific(precision) => {
                let raw = format!("{:.*e}", precision, value);
                match raw.split_once('e') {
                    Some((mantissa, exp)) => {
                        let exp: i32 = exp.parse().unwrap_or(0);
                        let sign = if exp < 0 { '-' } else { '+' };
                        format!("{}e{}{:02}", mantissa, sign, exp.abs())
                    }
                    None => raw,
                }
            }
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueFormat::Scientific(p) => write!(f, ".{}e", p),
            ValueFormat::Fixed(p) => write!(f, ".{}f", p),
        }
    }
}

impl FromStr for ValueFormat {
    type Err = PlotError;

    /// Parse a format spec such as `.1e` or `.2f`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlotError::Precondition(format!("unsupported value format '{}'", s));

        let spec = s.strip_prefix('.').ok_or_else(invalid)?;
        let kind = spec.chars().last().ok_or_else(invalid)?;
        let digits = &spec[..spec.len() - kind.len_utf8()];
        let precision: usize = digits.parse().map_err(|_| invalid())?;
        match kind {
            'e' => Ok(ValueFormat::Scientific(precision)),
            'f' => Ok(ValueFormat::Fixed(precision)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific() {
        let fmt = ValueFormat::default();
        assert_eq!(fmt.format(12345.0), "1.2e+04");
        assert_eq!(fmt.format(0.00123), "1.2e-03");
        assert_eq!(fmt.format(0.0), "0.0e+00");
        assert_eq!(ValueFormat::Scientific(2).format(-1.5e120), "-1.50e+120");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(ValueFormat::Fixed(2).format(1.23456), "1.23");
        assert_eq!(ValueFormat::Fixed(0).format(7.0), "7");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(ValueFormat::default().format(f64::NAN), "nan");
        assert_eq!(ValueFormat::Fixed(1).format(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_parse() {
        assert_eq!(".1e".parse::<ValueFormat>().unwrap(), ValueFormat::Scientific(1));
        assert_eq!(".3f".parse::<ValueFormat>().unwrap(), ValueFormat::Fixed(3));
        assert_eq!(ValueFormat::Fixed(3).to_string(), ".3f");
        assert!("1e".parse::<ValueFormat>().is_err());
        assert!(".xe".parse::<ValueFormat>().is_err());
        assert!(".2g".parse::<ValueFormat>().is_err());
        assert!(".".parse::<ValueFormat>().is_err());
    }

    #[test]
    fn test_parse_multibyte_kind() {
        for input in [".é", ".1µ", ".2€"] {
            assert!(matches!(
                input.parse::<ValueFormat>(),
                Err(PlotError::Precondition(_))
            ));
        }
    }
}
