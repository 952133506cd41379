//! Placeholder expansion for description texts.
//!
//! Descriptions may refer to fields defined before them with `{field_name}`.
//! `{{` and `}}` produce literal braces. Anything else in braces is rejected
//! so a typo never leaks into generated documentation.

use crate::config::error::{ConfigResult, ConfigurationError};
use regex::Regex;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([A-Za-z0-9_]*)\}|[{}]").expect("token pattern is valid")
    })
}

/// Expand the placeholders of `template` using `vars`.
///
/// `field` names the template in error messages.
pub fn expand(field: &str, template: &str, vars: &[(&str, &str)]) -> ConfigResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in token_pattern().captures_iter(template) {
        let Some(token) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..token.start()]);
        last = token.end();

        match token.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            "{" | "}" => {
                return Err(ConfigurationError::unbalanced_template(field, token.start()))
            }
            _ => {
                let name = caps.get(1).map_or("", |m| m.as_str());
                let value = vars
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| ConfigurationError::unknown_placeholder(field, name))?;
                out.push_str(value);
            }
        }
    }

    out.push_str(&template[last..]);
    Ok(out)
}
