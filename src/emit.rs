use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::magic::FoundMagic;
use crate::slider::SliderKind;

/// Renders a completed set of search results to some literal syntax.
/// Every implementation emits the rook block first, then the bishop
/// block, each with its 64 entries in ascending square order as lowercase
/// `0x` hex with no fixed width.
pub trait MagicFormat {
    fn render(&self, found: &[FoundMagic], out: &mut dyn Write) -> io::Result<()>;
}

fn magics_of(found: &[FoundMagic], kind: SliderKind) -> impl Iterator<Item = u64> + '_ {
    found
        .iter()
        .filter(move |f| f.kind == kind)
        .map(|f| f.magic)
}

const fn table_name(kind: SliderKind) -> &'static str {
    match kind {
        SliderKind::Rook => "ROOK_MAGICS",
        SliderKind::Bishop => "BISHOP_MAGICS",
    }
}

/// Python module syntax, one list per slider kind.
pub struct PythonLists;

impl MagicFormat for PythonLists {
    fn render(&self, found: &[FoundMagic], out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "# Auto-generated magic numbers")?;

        for kind in SliderKind::iter() {
            writeln!(out, "{} = [", table_name(kind))?;
            for magic in magics_of(found, kind) {
                writeln!(out, "    {magic:#x},")?;
            }
            writeln!(out, "]")?;

            if kind == SliderKind::Rook {
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

/// Rust const arrays, for pasting into an engine crate.
pub struct RustArrays;

impl MagicFormat for RustArrays {
    fn render(&self, found: &[FoundMagic], out: &mut dyn Write) -> io::Result<()> {
        for kind in SliderKind::iter() {
            writeln!(out, "pub const {}: [u64; 64] = [", table_name(kind))?;
            for magic in magics_of(found, kind) {
                writeln!(out, "    {magic:#x},")?;
            }
            writeln!(out, "];")?;

            if kind == SliderKind::Rook {
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
