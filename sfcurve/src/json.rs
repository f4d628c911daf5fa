use crate::error::{CurveError, Result};
use crate::geometry::limits;
use crate::model::Line;
use crate::template::Template;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct TemplateDoc {
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    lines: Vec<Line>,
}

pub fn template_to_json_value(name: Option<&str>, t: &Template) -> Value {
    let doc = TemplateDoc {
        version: VERSION,
        name: name.map(str::to_string),
        lines: t.lines().to_vec(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn template_to_json_string(name: Option<&str>, t: &Template) -> String {
    template_to_json_value(name, t).to_string()
}

pub fn template_from_json_value(v: Value) -> Result<(Option<String>, Template)> {
    let doc: TemplateDoc = serde_json::from_value(v)?;
    if doc.version != VERSION {
        return Err(CurveError::Json(format!("unsupported version {}", doc.version)));
    }
    if doc.lines.len() > limits::MAX_TEMPLATE_LINES {
        return Err(CurveError::Json(format!(
            "{} lines exceeds cap of {}",
            doc.lines.len(),
            limits::MAX_TEMPLATE_LINES
        )));
    }
    let t = Template::new(doc.lines)?;
    Ok((doc.name, t))
}

pub fn template_from_json_str(s: &str) -> Result<(Option<String>, Template)> {
    let v: Value = serde_json::from_str(s)?;
    template_from_json_value(v)
}
