//! Identifier case conversions.
//!
//! | Method                                   | `AnyKindOfString`     |
//! |------------------------------------------|-----------------------|
//! | `to_snake()`                             | `any_kind_of_string`  |
//! | `to_screaming_snake()`                   | `ANY_KIND_OF_STRING`  |
//! | `to_kebab()`                             | `any-kind-of-string`  |
//! | `to_screaming_kebab()`                   | `ANY-KIND-OF-STRING`  |
//! | `to_delimited('.')`                      | `any.kind.of.string`  |
//! | `to_screaming_delimited('.', "", true)`  | `ANY.KIND.OF.STRING`  |
//! | `to_pascal()`                            | `AnyKindOfString`     |
//! | `to_camel()`                             | `anyKindOfString`     |
//!
//! Every conversion is stable: feeding its output back in returns the same
//! string. Pascal and camel case only capitalise the first character after a
//! separator, so `x_y` becomes `XY` and stays `XY`. A dotted capital `İ` is
//! read as a plain `I`.

use std::fmt;

use heck::ToSnakeCase;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// An identifier with case-converted views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NameCase(String);

impl NameCase {
    /// Wraps `name` without altering it.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `any_kind_of_string`
    #[must_use]
    pub fn to_snake(&self) -> String {
        delimited(&self.0, '_', "", false)
    }

    /// `ANY_KIND_OF_STRING`
    #[must_use]
    pub fn to_screaming_snake(&self) -> String {
        delimited(&self.0, '_', "", true)
    }

    /// `any-kind-of-string`
    #[must_use]
    pub fn to_kebab(&self) -> String {
        delimited(&self.0, '-', "", false)
    }

    /// `ANY-KIND-OF-STRING`
    #[must_use]
    pub fn to_screaming_kebab(&self) -> String {
        delimited(&self.0, '-', "", true)
    }

    /// `AnyKindOfString`
    #[must_use]
    pub fn to_pascal(&self) -> String {
        let words = camel_words(&self.0);
        let mut out = String::with_capacity(self.0.len());
        for word in &words {
            push_capitalised(&mut out, word);
        }
        out
    }

    /// `anyKindOfString`
    #[must_use]
    pub fn to_camel(&self) -> String {
        let words = camel_words(&self.0);
        let mut out = String::with_capacity(self.0.len());
        let mut rest = words.iter();
        if let Some(first) = rest.next() {
            push_lower_leading(&mut out, first);
        }
        for word in rest {
            push_capitalised(&mut out, word);
        }
        out
    }

    /// Lowercase words joined by `delimiter`.
    #[must_use]
    pub fn to_delimited(&self, delimiter: char) -> String {
        delimited(&self.0, delimiter, "", false)
    }

    /// Snake case that keeps every character of `ignore` verbatim, so
    /// `AnyKind.OfString` with `ignore = "."` becomes `any_kind.of_string`.
    #[must_use]
    pub fn to_snake_with_ignore(&self, ignore: &str) -> String {
        delimited(&self.0, '_', ignore, false)
    }

    /// Words joined by `delimiter`, keeping characters from `ignore`
    /// untouched and upper-casing the words when `screaming` is set.
    #[must_use]
    pub fn to_screaming_delimited(&self, delimiter: char, ignore: &str, screaming: bool) -> String {
        delimited(&self.0, delimiter, ignore, screaming)
    }
}

/// Converts `input` segment by segment; characters listed in `ignore` split
/// segments and are copied through unchanged.
pub(crate) fn delimited(input: &str, delimiter: char, ignore: &str, screaming: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut segment = String::new();
    for ch in input.chars() {
        if ignore.contains(ch) {
            push_segment(&mut out, &segment, delimiter, screaming);
            segment.clear();
            out.push(ch);
        } else {
            segment.push(ch);
        }
    }
    push_segment(&mut out, &segment, delimiter, screaming);
    out
}

fn push_segment(out: &mut String, segment: &str, delimiter: char, screaming: bool) {
    let snake = segment.replace('İ', "I").to_snake_case();
    let mut first = true;
    for word in snake.split('_').filter(|word| !word.is_empty()) {
        if !first {
            out.push(delimiter);
        }
        first = false;
        if screaming {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(word);
        }
    }
}

/// Splits on anything that is not alphanumeric. When there is more than one
/// word, an all-capitals word such as `CERT` in `CERT_MODEL` is lowered after
/// its first letter.
fn camel_words(input: &str) -> Vec<String> {
    let segments: Vec<&str> = input
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .collect();
    let several = segments.len() > 1;
    segments
        .into_iter()
        .map(|segment| {
            let shouting = segment.chars().nth(1).is_some()
                && segment.chars().any(char::is_uppercase)
                && !segment.chars().any(char::is_lowercase);
            if several && shouting {
                let mut chars = segment.chars();
                let head: String = chars.next().into_iter().collect();
                head + &lower_str(chars.as_str())
            } else {
                segment.to_owned()
            }
        })
        .collect()
}

fn push_capitalised(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Lowers the leading run of capitals. When lowercase letters follow a run
/// of two or more, the last capital starts the next word: `HTTPServer`
/// becomes `httpServer`.
fn push_lower_leading(out: &mut String, word: &str) {
    let run = word.chars().take_while(|ch| ch.is_uppercase()).count();
    let followed_by_lower = word.chars().nth(run).is_some_and(char::is_lowercase);
    let lowered = if run > 1 && followed_by_lower { run - 1 } else { run };
    for (index, ch) in word.chars().enumerate() {
        if index < lowered {
            push_lower(out, ch);
        } else {
            out.push(ch);
        }
    }
}

fn lower_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        push_lower(&mut out, ch);
    }
    out
}

fn push_lower(out: &mut String, ch: char) {
    if ch == 'İ' {
        out.push('i');
    } else {
        out.extend(ch.to_lowercase());
    }
}

impl fmt::Display for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NameCase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameCase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NameCase {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Templates see every fixed conversion as a plain attribute, e.g.
/// `{{ type_name.snake }}`.
impl Serialize for NameCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NameCase", 7)?;
        state.serialize_field("original", self.as_str())?;
        state.serialize_field("snake", &self.to_snake())?;
        state.serialize_field("screaming_snake", &self.to_screaming_snake())?;
        state.serialize_field("kebab", &self.to_kebab())?;
        state.serialize_field("screaming_kebab", &self.to_screaming_kebab())?;
        state.serialize_field("pascal", &self.to_pascal())?;
        state.serialize_field("camel", &self.to_camel())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Conversion = fn(&NameCase) -> String;

    fn conversions() -> [(&'static str, Conversion); 9] {
        [
            ("snake", NameCase::to_snake),
            ("screaming_snake", NameCase::to_screaming_snake),
            ("kebab", NameCase::to_kebab),
            ("screaming_kebab", NameCase::to_screaming_kebab),
            ("pascal", NameCase::to_pascal),
            ("camel", NameCase::to_camel),
            ("dotted", |name| name.to_delimited('.')),
            ("dotted_loud", |name| name.to_screaming_delimited('.', "", true)),
            ("snake_ignore_dot", |name| name.to_snake_with_ignore(".")),
        ]
    }

    #[rstest]
    #[case::pascal("AnyKindOfString")]
    #[case::snake("any_kind_of_string")]
    #[case::acronym("HTTPServerID")]
    #[case::digits("Version2Beta")]
    #[case::dotted("AnyKind.OfString")]
    #[case::spaced("  leading and trailing  ")]
    #[case::unicode("创建时间")]
    #[case::single_letters("x_y")]
    #[case::single_letter_tail("pos_x_y")]
    #[case::dot_separated_letters("a.b")]
    #[case::mixed_separators("x-y z")]
    #[case::dotted_capital("İstanbul")]
    #[case::shouting("CERT_MODEL")]
    #[case::empty("")]
    fn conversions_are_idempotent(#[case] input: &str) {
        for (label, convert) in conversions() {
            let once = convert(&NameCase::new(input));
            let twice = convert(&NameCase::new(once.clone()));
            assert_eq!(once, twice, "{label} is not idempotent for {input:?}");
        }
    }

    #[rstest]
    fn documented_table_holds() {
        let name = NameCase::new("AnyKindOfString");
        assert_eq!(name.to_snake(), "any_kind_of_string");
        assert_eq!(name.to_screaming_snake(), "ANY_KIND_OF_STRING");
        assert_eq!(name.to_kebab(), "any-kind-of-string");
        assert_eq!(name.to_screaming_kebab(), "ANY-KIND-OF-STRING");
        assert_eq!(name.to_delimited('.'), "any.kind.of.string");
        assert_eq!(
            name.to_screaming_delimited('.', "", true),
            "ANY.KIND.OF.STRING"
        );
        assert_eq!(name.to_pascal(), "AnyKindOfString");
        assert_eq!(name.to_camel(), "anyKindOfString");
        assert_eq!(name.as_str(), "AnyKindOfString");
    }

    #[rstest]
    #[case("x_y", "XY", "xY")]
    #[case("x-y z", "XYZ", "xYZ")]
    #[case("pos_x_y", "PosXY", "posXY")]
    #[case("CERT_MODEL", "CertModel", "certModel")]
    #[case("HTTPServerID", "HTTPServerID", "httpServerID")]
    #[case("create_time", "CreateTime", "createTime")]
    fn separators_start_new_words(#[case] input: &str, #[case] pascal: &str, #[case] camel: &str) {
        let name = NameCase::new(input);
        assert_eq!(name.to_pascal(), pascal, "pascal of {input:?}");
        assert_eq!(name.to_camel(), camel, "camel of {input:?}");
    }

    #[rstest]
    fn dotted_capital_reads_as_plain() {
        let name = NameCase::new("İstanbul");
        assert_eq!(name.to_snake(), "istanbul");
        assert_eq!(name.to_kebab(), "istanbul");
        assert_eq!(name.to_delimited('.'), "istanbul");
        assert_eq!(name.to_camel(), "istanbul");
        assert_eq!(name.to_pascal(), "İstanbul");
    }

    #[rstest]
    fn ignored_characters_survive() {
        let name = NameCase::new("AnyKind.OfString");
        assert_eq!(name.to_snake_with_ignore("."), "any_kind.of_string");
        assert_eq!(
            name.to_screaming_delimited('-', ".", true),
            "ANY-KIND.OF-STRING"
        );
    }

    #[rstest]
    fn model_names_convert() {
        assert_eq!(NameCase::new("CertModel").to_snake(), "cert_model");
        assert_eq!(NameCase::new("public_name").to_pascal(), "PublicName");
    }

    #[rstest]
    fn serialises_all_fixed_views() -> anyhow::Result<()> {
        let value = serde_json::to_value(NameCase::new("CertModel"))?;
        anyhow::ensure!(value["original"] == "CertModel", "original: {value}");
        anyhow::ensure!(value["snake"] == "cert_model", "snake: {value}");
        anyhow::ensure!(value["kebab"] == "cert-model", "kebab: {value}");
        anyhow::ensure!(value["camel"] == "certModel", "camel: {value}");
        anyhow::ensure!(
            value["screaming_snake"] == "CERT_MODEL",
            "screaming snake: {value}"
        );
        Ok(())
    }
}
