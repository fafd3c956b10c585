//! Ready-made parsers over textual input: single characters, literal
//! strings, and the common numeric and boolean formats.
//!
//! Numeric parsing is locale independent: base 10, `.` as the decimal
//! separator, no digit grouping, no exponent form.

use crate::combinator::{bind, either, once_or_more, or_value, select, select_opt};
use crate::parser::{satisfy, Parser};

/// Exactly the character `expected`.
#[must_use]
pub fn char(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Exactly the string `literal`, produced verbatim on success.
#[must_use]
pub fn string(literal: &str) -> Parser<String> {
    let literal = literal.to_owned();
    Parser::from_fn(move |input| {
        input
            .strip_prefix(&literal)
            .map(|rest| (literal.clone(), rest))
    })
}

/// One or more ASCII digits, collected into a string.
#[must_use]
pub fn digits() -> Parser<String> {
    select(once_or_more(satisfy(|c| c.is_ascii_digit())), |chars| {
        chars.into_iter().collect()
    })
}

/// An optional `+` or `-` sign; `+` when absent.
fn sign() -> Parser<char> {
    or_value(either(char('+'), char('-')), '+')
}

/// A base 10 signed integer: optional `+`/`-` sign followed by one or
/// more digits. `123`, `+123` and `-123` all parse; a sign with no
/// digits after it does not.
///
/// Overflowing `i64` is a parse failure.
#[must_use]
pub fn integer() -> Parser<i64> {
    let signed = bind(sign(), |s| {
        select(digits(), move |ds| {
            if s == '-' {
                format!("-{ds}")
            } else {
                ds
            }
        })
    });
    select_opt(signed, |text| text.parse::<i64>().ok())
}

/// A floating point number: optional sign, then digits with an
/// optional `.` fraction. `1`, `1.`, `1.5` and `-1.5` all parse.
/// There is no exponent form; `1e5` parses as `1` leaving `e5`.
#[must_use]
pub fn double() -> Parser<f64> {
    let fraction = bind(char('.'), |_| {
        select(or_value(digits(), String::new()), |frac| format!(".{frac}"))
    });
    let mantissa = bind(digits(), move |whole| {
        select(or_value(fraction.clone(), String::new()), move |frac| {
            format!("{whole}{frac}")
        })
    });
    let signed = bind(sign(), move |s| {
        select(mantissa.clone(), move |m| {
            if s == '-' {
                format!("-{m}")
            } else {
                m
            }
        })
    });
    select_opt(signed, |text| text.parse::<f64>().ok())
}

/// The literal `true` or `false`, case sensitive.
#[must_use]
pub fn boolean() -> Parser<bool> {
    either(
        select(string("true"), |_| true),
        select(string("false"), |_| false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_matches_exactly_one() {
        assert_eq!(char('a').parse_str("abcd"), Some(('a', "bcd")));
        assert_eq!(char('a').parse_str("bcd"), None);
        assert_eq!(char('a').parse_str(""), None);
    }

    #[test]
    fn string_produces_the_literal() {
        let p = string("let");
        assert_eq!(p.parse_str("let x"), Some(("let".to_string(), " x")));
        assert_eq!(p.parse_str("le"), None);
        assert_eq!(string("").parse_str("abc"), Some((String::new(), "abc")));
    }

    #[test]
    fn digits_requires_at_least_one() {
        assert_eq!(digits().parse_str("007x"), Some(("007".to_string(), "x")));
        assert_eq!(digits().parse_str("x"), None);
    }

    #[test]
    fn integer_signs() {
        assert_eq!(integer().parse_str("123"), Some((123, "")));
        assert_eq!(integer().parse_str("+123"), Some((123, "")));
        assert_eq!(integer().parse_str("-123abc"), Some((-123, "abc")));
        assert_eq!(integer().parse_str("+7"), Some((7, "")));
        assert_eq!(integer().parse_str("abc"), None);
        assert_eq!(integer().parse_str("+"), None);
        assert_eq!(integer().parse_str("-"), None);
    }

    #[test]
    fn integer_overflow_fails() {
        assert_eq!(integer().parse_str("9223372036854775807"), Some((i64::MAX, "")));
        assert_eq!(integer().parse_str("9223372036854775808"), None);
    }

    #[test]
    fn double_forms() {
        assert_eq!(double().parse_str("123.456"), Some((123.456, "")));
        assert_eq!(double().parse_str("123"), Some((123.0, "")));
        assert_eq!(double().parse_str("1."), Some((1.0, "")));
        assert_eq!(double().parse_str("-1.5xyz"), Some((-1.5, "xyz")));
        assert_eq!(double().parse_str("+0.25"), Some((0.25, "")));
        assert_eq!(double().parse_str(".5"), None);
        assert_eq!(double().parse_str("abc"), None);
    }

    #[test]
    fn double_has_no_exponent_form() {
        assert_eq!(double().parse_str("1e5"), Some((1.0, "e5")));
    }

    #[test]
    fn boolean_is_case_sensitive() {
        assert_eq!(boolean().parse_str("trueabc"), Some((true, "abc")));
        assert_eq!(boolean().parse_str("false!"), Some((false, "!")));
        assert_eq!(boolean().parse_str("False"), None);
        assert_eq!(boolean().parse_str("TRUE"), None);
    }
}
