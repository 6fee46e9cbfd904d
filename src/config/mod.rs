pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "perswap")]
#[command(about = "Converts a pyAlya periodicity pairing file (slave/master) into the \
master/slave ordering expected by the solver")]
#[command(after_help = "Exit codes:
  0  success
  1  invalid configuration
  2  usage error (wrong argument count)
  3  input file could not be opened
  4  memory reservation failed
  5  malformed input line
  6  node id could not be parsed
  7  output file could not be written")]
pub struct CliConfig {
    #[arg(help = "Case name; reads <case>.per.dat and writes <case>.per")]
    pub case_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report CPU/memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Show the conversion plan without writing the output file")]
    pub dry_run: bool,
}

impl ConfigProvider for CliConfig {
    fn case_name(&self) -> &str {
        &self.case_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_case_name("case name", &self.case_name)
    }
}
