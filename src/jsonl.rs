use serde::Serialize;
use std::io;

/// Single-line JSON with `", "` and `": "` separators.
///
/// Strings use serde_json's escaping, so non-ASCII text stays literal.
pub struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes one record, without the trailing newline.
pub fn to_line<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(value: &serde_json::Value) -> String {
        String::from_utf8(to_line(value).unwrap()).unwrap()
    }

    #[test]
    fn separators_have_trailing_space() {
        let value = serde_json::json!({ "a": [1, 2, 3], "b": { "c": "d" } });
        assert_eq!(line(&value), r#"{"a": [1, 2, 3], "b": {"c": "d"}}"#);
    }

    #[test]
    fn empty_containers_stay_tight() {
        let value = serde_json::json!({ "a": [], "b": {} });
        assert_eq!(line(&value), r#"{"a": [], "b": {}}"#);
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let value = serde_json::json!("café – naïve 日本");
        assert_eq!(line(&value), "\"café – naïve 日本\"");
    }

    #[test]
    fn quotes_and_control_characters_are_escaped() {
        let value = serde_json::json!("say \"hi\"\n\tback\\slash\u{1}");
        assert_eq!(
            line(&value),
            r#""say \"hi\"\n\tback\\slash\u0001""#
        );
    }
}
