/// Raw reading of a sensor unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub line: usize,
    pub code: String,
    pub data: Vec<f64>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PackageError {
    #[error("line {line}: {value:?} is not a number")]
    InvalidNumber { line: usize, value: String },
}

#[must_use]
pub fn samples() -> Vec<Package> {
    [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (code, data))| Package {
        line: i + 1,
        code: code.to_string(),
        data,
    })
    .collect()
}

/// Parse packages from text.
///
/// Each line holds an activity type code followed by its values, separated by
/// whitespace or commas. Empty lines and lines starting with `#` are skipped.
pub fn parse_packages(input: &str) -> Result<Vec<Package>, PackageError> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| parse_package(line, text))
        .collect()
}

fn parse_package(line: usize, text: &str) -> Result<Package, PackageError> {
    let mut fields = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty());
    let code = fields.next().unwrap_or_default().to_string();
    let data = fields
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|_| PackageError::InvalidNumber {
                    line,
                    value: field.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Package { line, code, data })
}
