#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn render(fields: &[&str]) -> String {
    let mut writer = CsvWriter::new(Vec::new());
    writer.write_record(fields).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[parameterized(
    plain = { &["1", "open", "x"], "1,open,x\n" },
    empty_fields = { &["1", "", ""], "1,,\n" },
    comma = { &["a,b"], "\"a,b\"\n" },
    quote = { &["say \"hi\""], "\"say \"\"hi\"\"\"\n" },
    newline = { &["two\nlines"], "\"two\nlines\"\n" },
    carriage_return = { &["a\rb"], "\"a\rb\"\n" },
    leading_space = { &[" padded"], "\" padded\"\n" },
    trailing_space = { &["padded "], "padded \n" },
    end_marker = { &[r"\."], "\"\\.\"\n" },
    colon = { &["cmd/go: fix build"], "cmd/go: fix build\n" },
)]
fn write_record(fields: &[&str], expected: &str) {
    assert_eq!(render(fields), expected);
}

#[test]
fn records_accumulate() {
    let mut writer = CsvWriter::new(Vec::new());
    writer.write_record(&["1", "a"]).unwrap();
    writer.write_record(&[String::from("2"), String::from("b")]).unwrap();
    writer.flush().unwrap();
    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "1,a\n2,b\n");
}
