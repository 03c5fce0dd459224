//! XML-RPC request serialization
//!
//! Builds `<methodCall>` documents from [`FieldValue`] trees. String
//! content goes through `quick_xml::escape` so field values containing
//! markup characters cannot corrupt the document.

use kivu_domain::FieldValue;
use quick_xml::escape::escape;

/// Serialize an XML-RPC method call with the given parameters.
pub fn method_call(method: &str, params: &[FieldValue]) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("<?xml version=\"1.0\"?>");
    out.push_str("<methodCall><methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        write_value(&mut out, param);
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>");
    out
}

fn write_value(out: &mut String, value: &FieldValue) {
    out.push_str("<value>");
    match value {
        FieldValue::Int(n) => {
            out.push_str("<int>");
            out.push_str(&n.to_string());
            out.push_str("</int>");
        }
        FieldValue::Double(d) => {
            out.push_str("<double>");
            out.push_str(&d.to_string());
            out.push_str("</double>");
        }
        FieldValue::Bool(b) => {
            out.push_str("<boolean>");
            out.push(if *b { '1' } else { '0' });
            out.push_str("</boolean>");
        }
        FieldValue::Str(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        FieldValue::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        FieldValue::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name.as_str()));
                out.push_str("</name>");
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
        FieldValue::Nil => out.push_str("<nil/>"),
    }
    out.push_str("</value>");
}
