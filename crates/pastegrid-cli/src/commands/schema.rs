//! Schema command - summarize what a paste was parsed into.

use colored::Colorize;
use pastegrid::{ColumnType, Pastegrid, TypedValue};

use super::{build_config, read_paste};
use crate::cli::InputArgs;

pub fn run(input: InputArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&input)?;
    let paste = read_paste(&input)?;

    let (table, source) = Pastegrid::with_config(config).parse_with_source(&paste)?;

    println!(
        "{} {} ({} rows, {} columns)",
        "Format".cyan().bold(),
        source.format.white(),
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold()
    );
    println!();

    for (index, (header, column_type)) in table.headers.iter().zip(&table.column_types).enumerate() {
        let missing = table.column(index).filter(|v| v.is_missing()).count();
        let type_name = format!("{:10}", column_type.as_str());
        let type_name = match column_type {
            ColumnType::String => type_name.yellow(),
            ColumnType::Integer | ColumnType::Numeric => type_name.blue(),
            ColumnType::Boolean => type_name.magenta(),
        };

        print!("  {:24} {}", header, type_name);
        if missing > 0 {
            print!(" {}", format!("{} missing", missing).dimmed());
        }
        println!();

        if verbose {
            if let Some(sample) = table.column(index).find(|v| !v.is_missing()) {
                println!("  {:24} {}", "", sample_text(sample).dimmed());
            }
        }
    }

    let duplicates = table.duplicate_headers();
    if !duplicates.is_empty() {
        println!();
        println!(
            "{} {}",
            "Duplicate headers:".yellow().bold(),
            duplicates.join(", ")
        );
    }

    Ok(())
}

fn sample_text(value: &TypedValue) -> String {
    match value {
        TypedValue::Integer { value } => format!("e.g. {}", value),
        TypedValue::Numeric { value } => format!("e.g. {}", value),
        other => format!("e.g. {}", other.as_str().unwrap_or_default()),
    }
}
