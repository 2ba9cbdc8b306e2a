//! Parse command - print the typed table as JSON.

use pastegrid::Pastegrid;

use super::{build_config, read_paste};
use crate::cli::InputArgs;

pub fn run(input: InputArgs, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&input)?;
    let paste = read_paste(&input)?;

    let table = Pastegrid::with_config(config).parse(&paste)?;
    println!("{}", table.to_json(pretty)?);

    Ok(())
}
