//! Text rendering of values.
//!
//! `readable` is the display form. `unreadable` is the canonical form and
//! equals `readable` except that plain strings are emitted raw, so the two
//! only diverge where text is nested inside a value.

use std::fmt;

use crate::value::{LispString, Map, StringKind, Value, KEYWORD_PREFIX};

const MACRO_TAG: &str = "#<macro>";
const FUNCTION_TAG: &str = "#<function>";

/// Escape `\`, newline and `"` (backslash first) and wrap in double quotes.
pub fn escape_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

impl LispString {
    pub fn readable(&self) -> String {
        match self.kind() {
            StringKind::Keyword => self.keyword_form(),
            StringKind::Plain => escape_string(self.text()),
        }
    }

    pub fn unreadable(&self) -> String {
        match self.kind() {
            StringKind::Keyword => self.keyword_form(),
            StringKind::Plain => self.text().to_string(),
        }
    }

    fn keyword_form(&self) -> String {
        let mut out = String::with_capacity(self.text().len() + 1);
        out.push(KEYWORD_PREFIX);
        out.push_str(self.text());
        out
    }
}

#[derive(Clone, Copy)]
enum Form {
    Readable,
    Unreadable,
}

impl Value {
    pub fn readable(&self) -> String {
        render(self, Form::Readable)
    }

    pub fn unreadable(&self) -> String {
        render(self, Form::Unreadable)
    }
}

fn render(value: &Value, form: Form) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Boolean(true) => "true".to_string(),
        Value::Boolean(false) => "false".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Str(s) => match form {
            Form::Readable => s.readable(),
            Form::Unreadable => s.unreadable(),
        },
        Value::Symbol(sym) => sym.name().to_string(),
        Value::List(items) => render_seq("[", items, "]", form),
        Value::Vector(items) => render_seq("(", items, ")", form),
        Value::Map(map) => render_map(map, form),
        Value::Atom(atom) => format!("(atom {})", atom.native().readable()),
        Value::Function(f) if f.is_macro() => MACRO_TAG.to_string(),
        Value::Function(_) => FUNCTION_TAG.to_string(),
        Value::Exception(e) => e.message(),
    }
}

fn render_seq(open: &str, items: &[Value], close: &str, form: Form) -> String {
    let parts: Vec<String> = items.iter().map(|item| render(item, form)).collect();
    format!("{}{}{}", open, parts.join(" "), close)
}

fn render_map(map: &Map, form: Form) -> String {
    let mut parts = Vec::with_capacity(map.len() * 2);
    for (key, value) in map.iter() {
        parts.push(match form {
            Form::Readable => LispString::plain(key).readable(),
            Form::Unreadable => LispString::encoded(key).unreadable(),
        });
        parts.push(render(value, form));
    }
    format!("{{{}}}", parts.join(" "))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.readable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::Exception;
    use crate::function::Function;

    #[test]
    fn scalars() {
        assert_eq!(Value::Nil.readable(), "nil");
        assert_eq!(Value::boolean(true).readable(), "true");
        assert_eq!(Value::boolean(false).readable(), "false");
        assert_eq!(Value::integer(-17).readable(), "-17");
        assert_eq!(Value::symbol("car").readable(), "car");
        assert_eq!(Value::integer(-17).unreadable(), "-17");
    }

    #[test]
    fn string_escaping_order() {
        let s = Value::string("a\"b\\c\nd");
        assert_eq!(s.readable(), "\"a\\\"b\\\\c\\nd\"");
        assert_eq!(s.unreadable(), "a\"b\\c\nd");
    }

    #[test]
    fn keywords_print_the_same_both_ways() {
        let kw = Value::keyword("foo");
        assert_eq!(kw.readable(), ":foo");
        assert_eq!(kw.unreadable(), ":foo");
        assert_eq!(Value::keyword("").readable(), "\"\u{029E}\"");
    }

    #[test]
    fn brackets() {
        let items = vec![Value::integer(1), Value::integer(2)];
        assert_eq!(Value::list(items.clone()).readable(), "[1 2]");
        assert_eq!(Value::vector(items).readable(), "(1 2)");
        assert_eq!(Value::list(vec![]).readable(), "[]");
        assert_eq!(Value::vector(vec![]).unreadable(), "()");
    }

    #[test]
    fn nested_strings_diverge_only_in_unreadable() {
        let v = Value::list(vec![
            Value::string("hi"),
            Value::vector(vec![Value::keyword("k"), Value::string("x\ny")]),
        ]);
        assert_eq!(v.readable(), "[\"hi\" (:k \"x\\ny\")]");
        assert_eq!(v.unreadable(), "[hi (:k x\ny)]");
    }

    #[test]
    fn map_keeps_insertion_order() {
        let map = Value::map([("b", Value::integer(2)), ("a", Value::integer(1))]);
        assert_eq!(map.readable(), "{\"b\" 2 \"a\" 1}");
        assert_eq!(map.unreadable(), "{b 2 a 1}");
        assert_eq!(Value::map(Vec::<(String, Value)>::new()).readable(), "{}");
    }

    #[test]
    fn map_keys_with_sentinel_print_as_keywords() {
        let map = Value::map([("\u{029E}name", Value::string("v"))]);
        assert_eq!(map.readable(), "{:name \"v\"}");
        assert_eq!(map.unreadable(), "{:name v}");
    }

    #[test]
    fn functions_and_macros() {
        let f = Function::compiled(|_| Ok(Value::Nil));
        let value = Value::function(f);
        assert_eq!(value.readable(), "#<function>");
        value.as_function().unwrap().make_macro();
        assert_eq!(value.readable(), "#<macro>");
        assert_eq!(value.unreadable(), "#<macro>");
    }

    #[test]
    fn atom_wraps_inner_readable() {
        let atom = Value::atom(Value::string("s"));
        assert_eq!(atom.readable(), "(atom \"s\")");
        assert_eq!(atom.unreadable(), "(atom \"s\")");
    }

    #[test]
    fn exceptions_print_their_message() {
        let e = Value::from(Exception::index(5));
        assert_eq!(e.readable(), "Index out of bounds: 5");
        assert_eq!(e.unreadable(), e.readable());
        assert_eq!(e.to_string(), "Index out of bounds: 5");
    }
}
