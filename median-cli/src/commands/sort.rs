use clap::Parser;

use crate::utils::parse_list;

/// Selection sort a comma-separated sequence
#[derive(Parser)]
pub struct SortArgs {
    /// The sequence to sort (e.g. `5,3,1`)
    #[arg(allow_hyphen_values = true)]
    pub list: String,
}

impl SortArgs {
    pub fn run(&self) -> anyhow::Result<String> {
        let mut list = parse_list(&self.list)?;
        median::sort::selection_sort(&mut list);
        Ok(list
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(","))
    }
}
