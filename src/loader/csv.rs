//! CSV ingestion: flat sales table -> validated `Transaction` records.
//!
//! Columns are resolved by name from the header row, so on-disk column
//! order is free. Every field is parsed and validated here: an unparseable
//! amount or timestamp fails the whole load with the offending line and
//! column, instead of leaking NaN into downstream sums.

use crate::loader::schema::Transaction;
use crate::utils::config::{
    COL_AMOUNT, COL_CREATED_AT, COL_CUSTOMER_ID, COL_GROUP_CODE, COL_GROUP_NAME, COL_ITEM_CODE,
    COL_ITEM_NAME, COL_ORDER_ID, REQUIRED_COLUMNS, TIMESTAMP_FORMAT,
};
use crate::utils::error::LoadError;
use chrono::NaiveDateTime;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load transactions from a CSV file on disk
///
/// # Arguments
/// * `path` - Path to the CSV file (header row required)
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened or read
/// * `LoadError::MissingColumn` - header lacks a required column
/// * `LoadError::InvalidField` - a field fails parse-and-validate
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>, LoadError> {
    let path = path.as_ref();
    info!("Loading transactions from: {}", path.display());

    let file = File::open(path)?;
    let records = read_transactions(BufReader::new(file))?;

    info!("Loaded {} transactions", records.len());
    Ok(records)
}

/// Read transactions from any buffered reader
///
/// Used directly by tests; `load_transactions` is the file-path front end.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(LoadError::EmptyInput),
    };
    let columns = resolve_columns(&header_line)?;
    let width = split_fields(&header_line).len();

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1; data starts at line 2
        let line_no = idx + 2;

        let fields = split_fields(&line);
        if fields.len() != width {
            return Err(LoadError::FieldCount {
                line: line_no,
                expected: width,
                found: fields.len(),
            });
        }

        records.push(parse_record(line_no, &columns, &fields)?);
    }

    debug!("Parsed {} data rows", records.len());
    Ok(records)
}

/// Map required column names to their positions in the header row
fn resolve_columns(header: &str) -> Result<HashMap<&'static str, usize>, LoadError> {
    let names = split_fields(header);
    let mut columns = HashMap::new();

    for required in REQUIRED_COLUMNS {
        match names.iter().position(|n| n.trim() == *required) {
            Some(pos) => {
                columns.insert(*required, pos);
            }
            None => return Err(LoadError::MissingColumn((*required).to_string())),
        }
    }

    Ok(columns)
}

/// Split one CSV line into fields, honouring double-quoted fields with
/// embedded separators. Escaped quotes (`""`) are unescaped. Multi-line
/// quoted fields are not supported; the source table is line-oriented.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Parse and validate one data row
fn parse_record(
    line_no: usize,
    columns: &HashMap<&'static str, usize>,
    fields: &[String],
) -> Result<Transaction, LoadError> {
    let field = |name: &'static str| fields[columns[name]].trim().to_string();

    let raw_amount = field(COL_AMOUNT);
    let amount: f64 = raw_amount.parse().map_err(|_| LoadError::InvalidField {
        line: line_no,
        column: COL_AMOUNT.to_string(),
        message: format!("not a number: {:?}", raw_amount),
    })?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(LoadError::InvalidField {
            line: line_no,
            column: COL_AMOUNT.to_string(),
            message: format!("amount must be finite and non-negative, got {}", amount),
        });
    }

    let raw_created = field(COL_CREATED_AT);
    let created_at = NaiveDateTime::parse_from_str(&raw_created, TIMESTAMP_FORMAT).map_err(
        |e| LoadError::InvalidField {
            line: line_no,
            column: COL_CREATED_AT.to_string(),
            message: format!("bad timestamp {:?}: {}", raw_created, e),
        },
    )?;

    let order_id = field(COL_ORDER_ID);
    if order_id.is_empty() {
        return Err(LoadError::InvalidField {
            line: line_no,
            column: COL_ORDER_ID.to_string(),
            message: "order id is empty".to_string(),
        });
    }

    Ok(Transaction {
        order_id,
        created_at,
        item_code: field(COL_ITEM_CODE),
        item_name: field(COL_ITEM_NAME),
        group_code: field(COL_GROUP_CODE),
        group_name: field(COL_GROUP_NAME),
        customer_id: field(COL_CUSTOMER_ID),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "order_id,created_at,item_code,item_name,group_code,group_name,customer_id,amount";

    fn read(input: &str) -> Result<Vec<Transaction>, LoadError> {
        read_transactions(input.as_bytes())
    }

    #[test]
    fn test_read_basic_rows() {
        let input = format!(
            "{}\nO1,2024-01-05 08:15:00,I1,Green tea,T,Teas,C1,35000\n\
             O1,2024-01-05 08:15:00,I2,Black tea,T,Teas,C1,40000\n",
            HEADER
        );
        let records = read(&input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].order_id, "O1");
        assert_eq!(records[0].amount, 35000.0);
        assert_eq!(records[1].item_name, "Black tea");
    }

    #[test]
    fn test_column_order_is_free() {
        let input = "amount,order_id,created_at,item_code,item_name,group_code,group_name,customer_id\n\
                     1000,O9,2024-03-01 10:00:00,I1,Tea,T,Teas,C1\n";
        let records = read(input).unwrap();
        assert_eq!(records[0].order_id, "O9");
        assert_eq!(records[0].amount, 1000.0);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let input = format!(
            "{}\nO1,2024-01-05 08:15:00,I1,\"Tea, loose leaf\",T,Teas,C1,35000\n",
            HEADER
        );
        let records = read(&input).unwrap();
        assert_eq!(records[0].item_name, "Tea, loose leaf");
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            split_fields("a,\"say \"\"hi\"\"\",b"),
            vec!["a", "say \"hi\"", "b"]
        );
    }

    #[test]
    fn test_unparseable_amount_is_hard_error() {
        let input = format!(
            "{}\nO1,2024-01-05 08:15:00,I1,Tea,T,Teas,C1,not-a-number\n",
            HEADER
        );
        match read(&input) {
            Err(LoadError::InvalidField { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "amount");
            }
            other => panic!("expected InvalidField, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = format!("{}\nO1,2024-01-05 08:15:00,I1,Tea,T,Teas,C1,-5\n", HEADER);
        assert!(matches!(
            read(&input),
            Err(LoadError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_missing_column() {
        let input = "order_id,created_at,item_code,item_name,group_code,group_name,amount\n";
        match read(input) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "customer_id"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_field_count_mismatch() {
        let input = format!("{}\nO1,2024-01-05 08:15:00,I1,Tea\n", HEADER);
        assert!(matches!(
            read(&input),
            Err(LoadError::FieldCount { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(""), Err(LoadError::EmptyInput)));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = format!(
            "{}\n\nO1,2024-01-05 08:15:00,I1,Tea,T,Teas,C1,100\n\n",
            HEADER
        );
        assert_eq!(read(&input).unwrap().len(), 1);
    }
}
