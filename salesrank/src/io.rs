use clap::Args;
use sales_engine::{AnalysisError, MemoryMarket, io::RawDataset};
use serde_json::error::Category;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Every subcommand reads a dataset and writes JSON.
// This struct standardizes their implementation.
#[derive(Args, Debug)]
pub struct IOArgs {
    /// The dataset JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match &self.input {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }

    /// Parse the input as a dataset and check that its collections are present
    pub fn read_market(&self) -> anyhow::Result<MemoryMarket> {
        parse_market(self.read()?)
    }

    /// Serialize `value` as pretty-printed JSON to the output
    pub fn write_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let mut output = self.write()?;
        serde_json::to_writer_pretty(&mut output, value)?;
        writeln!(output)?;
        output.flush()?;
        Ok(())
    }
}

/// Parse a dataset from well-formed JSON.
///
/// JSON that parses but does not have the dataset's shape (e.g. `sellers`
/// given as an object) is reported as [`AnalysisError::InvalidData`].
/// Syntax and I/O failures are passed through unchanged.
pub fn parse_market<R: Read>(reader: R) -> anyhow::Result<MemoryMarket> {
    let dataset = serde_json::from_reader::<_, Option<RawDataset>>(reader).map_err(|err| {
        match err.classify() {
            Category::Data => anyhow::Error::from(AnalysisError::InvalidData(err.to_string())),
            _ => anyhow::Error::from(err),
        }
    })?;
    Ok(sales_engine::io::prepare(dataset)?)
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
