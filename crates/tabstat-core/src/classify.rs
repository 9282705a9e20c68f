use tabstat_model::ColumnRole;

/// Parse a raw value as a number.
///
/// Surrounding whitespace is ignored. Only finite values count: `NaN`, `inf`
/// and literals that overflow `f64` are rejected. Datasets that use them as
/// placeholders should list them as NA tokens.
pub fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Classify a column from its non-missing values.
///
/// `Numeric` when every value parses as a number. A column without values is
/// `Categorical`, which still yields a well-defined empty summary.
pub fn classify<'a, I>(values: I) -> ColumnRole
where
    I: IntoIterator<Item = &'a str>,
{
    let mut any = false;
    for value in values {
        if parse_number(value).is_none() {
            return ColumnRole::Categorical;
        }
        any = true;
    }
    if any {
        ColumnRole::Numeric
    } else {
        ColumnRole::Categorical
    }
}
