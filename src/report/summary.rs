use crate::core::error::Result;
use crate::core::model::FastaRecord;
use crate::core::stats;
use std::io::Write;

// Composition is computed here, at report time, from the final sequence.
pub fn write<W: Write>(w: &mut W, record: &FastaRecord) -> Result<()> {
    let comp = stats::composition(&record.sequence)?;
    writeln!(w, "Sequence statistics:")?;
    writeln!(w, "A: {:.1}%", comp.a)?;
    writeln!(w, "C: {:.1}%", comp.c)?;
    writeln!(w, "G: {:.1}%", comp.g)?;
    writeln!(w, "T: {:.1}%", comp.t)?;
    writeln!(w, "%CG: {:.1}%", comp.gc)?;
    Ok(())
}
