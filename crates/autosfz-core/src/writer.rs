//! SFZ text output.

use crate::error::{Error, Result};
use crate::types::{SfzInstrument, SfzRegion};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const RULE: &str = "//-------------------------------------------------";

/// Tool name credited in the header.
const GENERATOR: &str = "autosfz";

/// Write the instrument as SFZ text.
///
/// The output is a comment header, a single `<group>` and one `<region>`
/// block per region, each followed by a blank line.
pub fn write_sfz<W: Write>(instrument: &SfzInstrument, out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "// SFZ created by {GENERATOR} {}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "//")?;
    writeln!(out, "// Name:   {}", instrument.name)?;
    writeln!(out, "// Author: {}", instrument.author)?;
    writeln!(out, "// Date:   {}", instrument.created.format("%d %b, %Y"))?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    writeln!(out, "<group>")?;
    writeln!(out)?;

    for region in &instrument.regions {
        write_region(region, out)?;
    }
    Ok(())
}

fn write_region<W: Write>(region: &SfzRegion, out: &mut W) -> io::Result<()> {
    writeln!(out, "<region>")?;
    writeln!(out, "sample={}", region.sample)?;
    writeln!(
        out,
        "lovel={} hivel={}",
        region.vel_range.lovel, region.vel_range.hivel
    )?;
    writeln!(
        out,
        "lokey={} hikey={}",
        region.key_range.lokey.sfz_name(),
        region.key_range.hikey.sfz_name()
    )?;
    writeln!(out, "pitch_keycenter={}", region.pitch_keycenter.sfz_name())?;
    writeln!(out)
}

/// Render the instrument to a string.
pub fn render_sfz(instrument: &SfzInstrument) -> String {
    let mut buf = Vec::new();
    write_sfz(instrument, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create `path` and write the instrument into it.
///
/// Fails if the file already exists. A failure halfway leaves the partial
/// file behind.
pub fn write_sfz_file(instrument: &SfzInstrument, path: &Path) -> Result<()> {
    let file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let mut out = BufWriter::new(file);
    write_sfz(instrument, &mut out).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}
