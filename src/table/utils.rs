use arrow::datatypes::DataType;

/// Normalise a raw cell before typing it: surrounding whitespace and one pair
/// of wrapping double quotes are dropped, so `" 10 "` and `"\"10\""` both read as `10`.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Infer the Arrow dtype of a whole column from its cleaned cells.
///
/// Empty cells are treated as missing. A column is `Float64` only when it has
/// at least one value and every value parses as a number.
pub fn infer_column_dtype<'a, I>(cells: I) -> DataType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = false;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<f64>().is_err() {
            return DataType::Utf8;
        }
        seen = true;
    }
    if seen {
        DataType::Float64
    } else {
        DataType::Utf8
    }
}
