//! Values are kept as received and must fit in five characters, sign and decimal point included.
//! Anything `f64::from_str` accepts is a number, so `1.`, `.5`, `-0.2` and `1E3` all pass.

use alloc::string::String;

use crate::{types::Value, Error};

pub(crate) const MAX_VALUE_LEN: usize = 5;

/// Checks the text following a parameter letter.
///
/// `Ok(None)` means there was no text at all; whether that is an error depends on the letter, so
/// it is left to the caller.
pub(crate) fn parse_value(token: &str, text: &str) -> Result<Option<Value>, Error> {
    if text.len() > MAX_VALUE_LEN {
        return Err(Error::BadNumberFormat(token.into()));
    }
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(number) => Ok(Some(Value::new(String::from(text), number))),
        Err(_) => Err(Error::BadNumberFormat(token.into())),
    }
}

#[cfg(test)]
mod test {
    use super::parse_value;
    use crate::Error;

    #[test]
    fn accepts_common_number_shapes() {
        for (text, number) in [
            ("10", 10.),
            ("-2.5", -2.5),
            ("+1", 1.),
            (".5", 0.5),
            ("1.", 1.),
            ("99999", 99999.),
            ("1E3", 1000.),
        ] {
            let value = parse_value("X", text)
                .expect("a valid number")
                .expect("a value");
            assert_eq!(value.as_str(), text);
            assert_eq!(value.as_f64(), number);
        }
    }

    #[test]
    fn empty_text_is_not_decided_here() {
        assert_eq!(parse_value("L", ""), Ok(None));
    }

    #[test]
    fn more_than_five_characters_is_a_bad_number() {
        assert_eq!(
            parse_value("X100000", "100000"),
            Err(Error::BadNumberFormat("X100000".into()))
        );
        assert_eq!(
            parse_value("X-1.234", "-1.234"),
            Err(Error::BadNumberFormat("X-1.234".into()))
        );
    }

    #[test]
    fn non_numbers_are_bad_numbers() {
        for text in ["X", "1-", "1..2", "-", "."] {
            let token = format!("L{}", text);
            assert_eq!(
                parse_value(&token, text),
                Err(Error::BadNumberFormat(token.clone()))
            );
        }
    }
}
