//! XML-RPC response parsing
//!
//! A small recursive-descent parser over the quick-xml event stream.
//! Handles both `<params>` and `<fault>` responses, the `i4`/`i8`/`int`
//! spellings of integers, bare text inside `<value>` (which XML-RPC
//! defaults to string), and `<nil/>`.

use kivu_domain::{FieldValue, KivuError};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::{Fault, Response};
use crate::errors::InfraError;

/// Parse a `<methodResponse>` document.
pub fn parse_response(xml: &str) -> Result<Response, KivuError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match next_event(&mut reader)? {
            Event::Start(e) => match e.name().as_ref() {
                b"methodResponse" | b"params" | b"param" => continue,
                b"value" => {
                    let value = read_value(&mut reader)?;
                    return Ok(Response::Value(value));
                }
                b"fault" => {
                    let fault = read_fault(&mut reader)?;
                    return Ok(Response::Fault(fault));
                }
                other => {
                    return Err(unexpected_tag(other));
                }
            },
            Event::Eof => {
                return Err(KivuError::InvalidResponse(
                    "XML-RPC response contained no value or fault".into(),
                ));
            }
            _ => continue,
        }
    }
}

fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, KivuError> {
    reader
        .read_event()
        .map_err(|e| KivuError::from(InfraError::Xml(e)))
}

fn unexpected_tag(tag: &[u8]) -> KivuError {
    KivuError::InvalidResponse(format!(
        "unexpected element <{}> in XML-RPC response",
        String::from_utf8_lossy(tag)
    ))
}

fn unescape_text(text: &quick_xml::events::BytesText<'_>) -> Result<String, KivuError> {
    text.unescape()
        .map(|cow| cow.into_owned())
        .map_err(|e| KivuError::from(InfraError::Xml(e)))
}

/// Read one value. The opening `<value>` tag has already been consumed;
/// this consumes everything up to and including the matching `</value>`.
fn read_value(reader: &mut Reader<&[u8]>) -> Result<FieldValue, KivuError> {
    let value = loop {
        match next_event(reader)? {
            Event::Start(e) => {
                let parsed = match e.name().as_ref() {
                    b"int" | b"i4" | b"i8" => parse_int(&read_text(reader)?)?,
                    b"double" => parse_double(&read_text(reader)?)?,
                    b"boolean" => parse_boolean(&read_text(reader)?)?,
                    // Base64 and datetime content passes through as the raw
                    // string; the record layer keeps both opaque.
                    b"string" | b"base64" | b"dateTime.iso8601" => {
                        FieldValue::Str(read_text(reader)?)
                    }
                    b"array" => read_array(reader)?,
                    b"struct" => read_struct(reader)?,
                    b"nil" => {
                        drain_to_close(reader)?;
                        FieldValue::Nil
                    }
                    other => return Err(unexpected_tag(other)),
                };
                break parsed;
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"nil" => break FieldValue::Nil,
                b"string" => break FieldValue::Str(String::new()),
                b"array" => break FieldValue::Array(Vec::new()),
                b"struct" => break FieldValue::Struct(Default::default()),
                other => return Err(unexpected_tag(other)),
            },
            // Untyped content defaults to string per the XML-RPC grammar.
            Event::Text(t) => {
                let text = unescape_text(&t)?;
                consume_end(reader, b"value")?;
                return Ok(FieldValue::Str(text));
            }
            Event::End(e) if e.name().as_ref() == b"value" => {
                return Ok(FieldValue::Str(String::new()));
            }
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    };

    consume_end(reader, b"value")?;
    Ok(value)
}

/// Read the text content of a scalar element and consume its closing tag.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, KivuError> {
    let mut text = String::new();
    loop {
        match next_event(reader)? {
            Event::Text(t) => text.push_str(&unescape_text(&t)?),
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(truncated()),
            Event::Start(e) => {
                let tag = e.name().as_ref().to_vec();
                return Err(unexpected_tag(&tag));
            }
            _ => continue,
        }
    }
}

/// Consume events until the next closing tag. Used for `<nil>` spelled as
/// a start/end pair rather than an empty element.
fn drain_to_close(reader: &mut Reader<&[u8]>) -> Result<(), KivuError> {
    loop {
        match next_event(reader)? {
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn consume_end(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<(), KivuError> {
    loop {
        match next_event(reader)? {
            Event::End(e) if e.name().as_ref() == tag => return Ok(()),
            Event::End(e) => {
                let found = e.name().as_ref().to_vec();
                return Err(KivuError::InvalidResponse(format!(
                    "expected </{}>, found </{}>",
                    String::from_utf8_lossy(tag),
                    String::from_utf8_lossy(&found)
                )));
            }
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn read_array(reader: &mut Reader<&[u8]>) -> Result<FieldValue, KivuError> {
    let mut items = Vec::new();
    loop {
        match next_event(reader)? {
            Event::Start(e) => match e.name().as_ref() {
                b"data" => continue,
                b"value" => items.push(read_value(reader)?),
                other => return Err(unexpected_tag(other)),
            },
            Event::Empty(e) if e.name().as_ref() == b"data" => continue,
            Event::End(e) => match e.name().as_ref() {
                b"data" => continue,
                b"array" => return Ok(FieldValue::Array(items)),
                other => return Err(unexpected_tag(other)),
            },
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn read_struct(reader: &mut Reader<&[u8]>) -> Result<FieldValue, KivuError> {
    let mut members = std::collections::BTreeMap::new();
    loop {
        match next_event(reader)? {
            Event::Start(e) => match e.name().as_ref() {
                b"member" => {
                    let (name, value) = read_member(reader)?;
                    members.insert(name, value);
                }
                other => return Err(unexpected_tag(other)),
            },
            Event::End(e) if e.name().as_ref() == b"struct" => {
                return Ok(FieldValue::Struct(members));
            }
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn read_member(reader: &mut Reader<&[u8]>) -> Result<(String, FieldValue), KivuError> {
    let mut name: Option<String> = None;
    let mut value: Option<FieldValue> = None;
    loop {
        match next_event(reader)? {
            Event::Start(e) => match e.name().as_ref() {
                b"name" => name = Some(read_text(reader)?),
                b"value" => value = Some(read_value(reader)?),
                other => return Err(unexpected_tag(other)),
            },
            Event::End(e) if e.name().as_ref() == b"member" => {
                let name = name.ok_or_else(|| {
                    KivuError::InvalidResponse("struct member without a name".into())
                })?;
                return Ok((name, value.unwrap_or(FieldValue::Nil)));
            }
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn read_fault(reader: &mut Reader<&[u8]>) -> Result<Fault, KivuError> {
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == b"value" => {
                let value = read_value(reader)?;
                let FieldValue::Struct(members) = value else {
                    return Err(KivuError::InvalidResponse(
                        "fault payload was not a struct".into(),
                    ));
                };
                let code = match members.get("faultCode") {
                    Some(FieldValue::Int(n)) => *n,
                    _ => 0,
                };
                let message = match members.get("faultString") {
                    Some(FieldValue::Str(s)) => s.clone(),
                    _ => String::from("unknown ERP fault"),
                };
                return Ok(Fault { code, message });
            }
            Event::Eof => return Err(truncated()),
            _ => continue,
        }
    }
}

fn parse_int(text: &str) -> Result<FieldValue, KivuError> {
    text.trim()
        .parse::<i64>()
        .map(FieldValue::Int)
        .map_err(|_| KivuError::InvalidResponse(format!("invalid integer value: {text:?}")))
}

fn parse_double(text: &str) -> Result<FieldValue, KivuError> {
    text.trim()
        .parse::<f64>()
        .map(FieldValue::Double)
        .map_err(|_| KivuError::InvalidResponse(format!("invalid double value: {text:?}")))
}

fn parse_boolean(text: &str) -> Result<FieldValue, KivuError> {
    match text.trim() {
        "1" | "true" => Ok(FieldValue::Bool(true)),
        "0" | "false" => Ok(FieldValue::Bool(false)),
        other => Err(KivuError::InvalidResponse(format!(
            "invalid boolean value: {other:?}"
        ))),
    }
}

fn truncated() -> KivuError {
    KivuError::InvalidResponse("truncated XML-RPC response".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_value(xml: &str) -> FieldValue {
        match parse_response(xml).expect("parse") {
            Response::Value(v) => v,
            Response::Fault(f) => panic!("unexpected fault: {f:?}"),
        }
    }

    #[test]
    fn parses_integer_response() {
        let xml = r#"<?xml version="1.0"?>
            <methodResponse><params><param>
              <value><int>42</int></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Int(42));
    }

    #[test]
    fn parses_i4_and_i8_spellings() {
        let xml = r#"<methodResponse><params><param>
              <value><i4>7</i4></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Int(7));

        let xml = r#"<methodResponse><params><param>
              <value><i8>9000000000</i8></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Int(9_000_000_000));
    }

    #[test]
    fn parses_bare_text_as_string() {
        let xml = r#"<methodResponse><params><param>
              <value>hello &amp; goodbye</value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Str("hello & goodbye".into()));
    }

    #[test]
    fn parses_empty_value_as_empty_string() {
        let xml = r#"<methodResponse><params><param>
              <value></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Str(String::new()));
    }

    #[test]
    fn parses_boolean_false() {
        let xml = r#"<methodResponse><params><param>
              <value><boolean>0</boolean></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Bool(false));
    }

    #[test]
    fn parses_nil() {
        let xml = r#"<methodResponse><params><param>
              <value><nil/></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Nil);
    }

    #[test]
    fn parses_array_of_structs() {
        let xml = r#"<methodResponse><params><param>
          <value><array><data>
            <value><struct>
              <member><name>id</name><value><int>7</int></value></member>
              <member><name>x_name</name><value><string>Villa X</string></value></member>
              <member><name>x_studio_superficie</name><value><boolean>0</boolean></value></member>
            </struct></value>
          </data></array></value>
        </param></params></methodResponse>"#;

        let FieldValue::Array(items) = ok_value(xml) else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 1);
        let FieldValue::Struct(members) = &items[0] else {
            panic!("expected struct");
        };
        assert_eq!(members.get("id"), Some(&FieldValue::Int(7)));
        assert_eq!(members.get("x_name"), Some(&FieldValue::Str("Villa X".into())));
        assert_eq!(members.get("x_studio_superficie"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn parses_many_to_one_pair() {
        let xml = r#"<methodResponse><params><param>
          <value><array><data>
            <value><int>3</int></value>
            <value><string>Kigali</string></value>
          </data></array></value>
        </param></params></methodResponse>"#;

        assert_eq!(
            ok_value(xml),
            FieldValue::Array(vec![FieldValue::Int(3), FieldValue::Str("Kigali".into())])
        );
    }

    #[test]
    fn base64_and_datetime_pass_through_as_strings() {
        let xml = r#"<methodResponse><params><param>
              <value><base64>iVBORw0KGgo=</base64></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Str("iVBORw0KGgo=".into()));

        let xml = r#"<methodResponse><params><param>
              <value><dateTime.iso8601>20240601T10:30:00</dateTime.iso8601></value>
            </param></params></methodResponse>"#;
        assert_eq!(ok_value(xml), FieldValue::Str("20240601T10:30:00".into()));
    }

    #[test]
    fn parses_fault() {
        let xml = r#"<methodResponse><fault>
          <value><struct>
            <member><name>faultCode</name><value><int>2</int></value></member>
            <member><name>faultString</name><value><string>Access Denied</string></value></member>
          </struct></value>
        </fault></methodResponse>"#;

        match parse_response(xml).expect("parse") {
            Response::Fault(fault) => {
                assert_eq!(fault.code, 2);
                assert_eq!(fault.message, "Access Denied");
            }
            Response::Value(v) => panic!("unexpected value: {v:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        let result = parse_response("<methodResponse><params>");
        assert!(matches!(result, Err(KivuError::InvalidResponse(_))));
    }

    #[test]
    fn rejects_bad_integer() {
        let xml = r#"<methodResponse><params><param>
              <value><int>seven</int></value>
            </param></params></methodResponse>"#;
        assert!(matches!(parse_response(xml), Err(KivuError::InvalidResponse(_))));
    }
}
