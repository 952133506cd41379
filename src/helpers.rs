//! # Derived Field Helpers
//!
//! Pure functions that compute the derived fields of the metadata record:
//! the copyright year range and the optional third-party snippets embedded
//! into generated documentation.

use crate::config::error::{ConfigResult, ConfigurationError};
use chrono::{Datelike, Local};

/// Format the copyright range from `start_year` to the current calendar year.
///
/// Returns just the start year when the project started this year, and
/// `"<start>-<current>"` otherwise.
pub fn get_copyright_years(start_year: &str) -> ConfigResult<String> {
    copyright_years_at(start_year, Local::now().year())
}

/// Same as [`get_copyright_years`] with an explicit current year.
pub fn copyright_years_at(start_year: &str, current_year: i32) -> ConfigResult<String> {
    let start = parse_year(start_year)?;

    if start > current_year {
        return Err(ConfigurationError::year_in_future(start, current_year));
    }

    if start == current_year {
        Ok(start.to_string())
    } else {
        Ok(format!("{start}-{current_year}"))
    }
}

/// Parse a four digit calendar year.
pub fn parse_year(value: &str) -> ConfigResult<i32> {
    let trimmed = value.trim();

    if trimmed.len() != 4 {
        return Err(ConfigurationError::invalid_year(
            value,
            "expected a four digit year",
        ));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigurationError::invalid_year(
            value,
            "must contain only digits",
        ));
    }

    let year = trimmed
        .parse::<i32>()
        .map_err(|e| ConfigurationError::invalid_year(value, e.to_string()))?;

    // A leading zero would not survive formatting back into the range
    if year < 1000 {
        return Err(ConfigurationError::invalid_year(
            value,
            "year must not start with zero",
        ));
    }

    Ok(year)
}

/// Google Analytics (gtag.js) snippet for `tracking_id`, or `None` without one.
pub fn get_google_analytics(tracking_id: Option<&str>) -> Option<String> {
    let id = present(tracking_id)?;

    Some(format!(
        r#"<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());
  gtag('config', '{id}');
</script>"#
    ))
}

/// PayPal hosted donate button for `button_id`, or `None` without one.
pub fn get_paypal(button_id: Option<&str>) -> Option<String> {
    let id = present(button_id)?;

    Some(format!(
        r#"<form action="https://www.paypal.com/cgi-bin/webscr" method="post" target="_top">
<input type="hidden" name="cmd" value="_s-xclick">
<input type="hidden" name="hosted_button_id" value="{id}">
<input type="image" src="https://www.paypalobjects.com/en_US/i/btn/btn_donateCC_LG.gif" border="0" name="submit" alt="PayPal - The safer, easier way to pay online!">
<img alt="" border="0" src="https://www.paypalobjects.com/en_US/i/scr/pixel.gif" width="1" height="1">
</form>"#
    ))
}

// Blank ids count as unset.
fn present(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}
