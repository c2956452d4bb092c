//! Shared plumbing for the demo programs: argument parsing and writing CBOR
//! encoded samples to an MCAP trace.

use std::{
    borrow::Cow, collections::BTreeMap, fs::File, io::BufWriter, path::PathBuf, sync::Arc,
};

use anyhow::{bail, Context as _};
use serde::Serialize;
use svpwm_theory::Sector;

#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    /// Only set from the command line by [`Options::with_sector_from_args`].
    #[allow(dead_code)]
    pub sector: Sector,
}

impl Options {
    /// Parse `-o/--output <file>` from the command line.
    #[allow(dead_code)]
    pub fn from_args(default_output: &str) -> anyhow::Result<Self> {
        Self::parse(std::env::args().skip(1), default_output, false)
    }

    /// Parse `-o/--output <file>` and `-s/--sector <1..6>` from the command
    /// line.
    #[allow(dead_code)]
    pub fn with_sector_from_args(default_output: &str) -> anyhow::Result<Self> {
        Self::parse(std::env::args().skip(1), default_output, true)
    }

    fn parse(
        args: impl IntoIterator<Item = String>,
        default_output: &str,
        accept_sector: bool,
    ) -> anyhow::Result<Self> {
        let mut options = Options {
            output: PathBuf::from(default_output),
            sector: Sector::One,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => {
                    let value = args.next().context("missing value for --output")?;
                    options.output = PathBuf::from(value);
                }
                "-s" | "--sector" if accept_sector => {
                    let value = args.next().context("missing value for --sector")?;
                    let number: u8 = value
                        .parse()
                        .with_context(|| format!("sector {value:?} is not a number"))?;
                    options.sector = Sector::try_from(number)?;
                }
                other => bail!("unexpected argument {other:?}"),
            }
        }

        Ok(options)
    }
}

/// Write `(time_ns, message)` pairs to a single CBOR channel of an MCAP file,
/// returning the number of messages written.
pub fn write_trace<T: Serialize>(
    options: &Options,
    topic: &str,
    messages: impl IntoIterator<Item = (u64, T)>,
) -> anyhow::Result<usize> {
    let file = File::create(&options.output)
        .with_context(|| format!("creating {}", options.output.display()))?;
    let mut writer = mcap::Writer::new(BufWriter::new(file))?;
    let channel = mcap::Channel {
        topic: topic.to_owned(),
        schema: Some(Arc::new(mcap::Schema {
            name: "".to_owned(),
            encoding: "".to_owned(),
            data: Cow::default(),
        })),
        message_encoding: "cbor".to_owned(),
        metadata: BTreeMap::default(),
    };
    let channel_id = writer.add_channel(&channel)?;

    let mut buffer = Vec::with_capacity(256);
    let mut count = 0;
    for (time_ns, message) in messages {
        buffer.clear();
        ciborium::into_writer(&message, &mut buffer)
            .map_err(|e| anyhow::anyhow!("encoding message {count}: {e:?}"))?;
        writer.write_to_known_channel(
            &mcap::records::MessageHeader {
                channel_id,
                sequence: count,
                log_time: time_ns,
                publish_time: time_ns,
            },
            &buffer,
        )?;
        count += 1;
    }
    writer.finish()?;

    log::info!(
        "wrote {count} messages on {topic:?} to {}",
        options.output.display()
    );
    Ok(count as usize)
}
