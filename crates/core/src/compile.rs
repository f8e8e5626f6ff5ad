//! Single-pass compilation driver.
//!
//! One run streams each source file once, line by line, in a fixed
//! order: the standard glyph list, then the new-fonts list, then the
//! ZapfDingbats list. Merge order is order-sensitive (the first
//! occurrence of a name wins its code points), so passes never overlap
//! and nothing is parallelized.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::latin::LATIN_TEXT_NAMES;
use crate::parser::{SourcePos, decode_sequence, split_record};
use crate::source::SourceList;
use crate::table::{CompiledTable, GlyphName, MappingTableBuilder};

/// Drives one compilation run over the three glyph lists.
///
/// Constructed fresh per run and discarded after emission; there is no
/// process-wide table state.
#[derive(Debug, Default)]
pub struct Compiler {
    latin_subset: Option<Vec<GlyphName>>,
}

impl Compiler {
    /// A compiler applying the compiled-in Latin character set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the Latin character set, mainly for fixture-sized tables
    /// in tests.
    pub fn with_latin_subset<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.latin_subset = Some(
            names
                .into_iter()
                .map(|name| GlyphName::from(name.as_ref()))
                .collect(),
        );
        self
    }

    /// Compile the three glyph list files, in the canonical order.
    pub fn compile_paths(
        &self,
        standard: &Path,
        new_fonts: &Path,
        zapf_dingbats: &Path,
    ) -> Result<CompiledTable> {
        let sources = [
            (SourceList::AdobeGlyphList, standard),
            (SourceList::AdobeGlyphListNewFonts, new_fonts),
            (SourceList::ZapfDingbats, zapf_dingbats),
        ];
        for (list, _) in &sources {
            list.layout()?;
        }

        let mut builder = MappingTableBuilder::new();
        for (list, path) in sources {
            let label = path.display().to_string();
            // The reader is dropped, and the file closed, when the pass
            // returns, on the error path included.
            let reader = BufReader::new(File::open(path)?);
            run_pass(&mut builder, list, &label, reader)?;
        }
        self.finish(builder)
    }

    /// Compile from labelled readers, for callers that already hold the
    /// list contents. Sources are processed in the order given and must
    /// follow the canonical list order.
    pub fn compile_readers<R: BufRead>(
        &self,
        sources: Vec<(SourceList, String, R)>,
    ) -> Result<CompiledTable> {
        for (list, _, _) in &sources {
            list.layout()?;
        }

        let mut builder = MappingTableBuilder::new();
        for (list, label, reader) in sources {
            run_pass(&mut builder, list, &label, reader)?;
        }
        self.finish(builder)
    }

    fn finish(&self, mut builder: MappingTableBuilder) -> Result<CompiledTable> {
        match &self.latin_subset {
            Some(names) => builder.apply_latin_subset(names)?,
            None => builder.apply_latin_subset(LATIN_TEXT_NAMES.iter().copied())?,
        }
        Ok(builder.finish())
    }
}

/// Stream one source file through parse, decode and fold.
fn run_pass<R: BufRead>(
    builder: &mut MappingTableBuilder,
    list: SourceList,
    label: &str,
    reader: R,
) -> Result<()> {
    let layout = list.layout()?;
    let flags = list.flags();

    let mut records = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let pos = SourcePos {
            file: label,
            line: index + 1,
        };
        let Some((name, tokens)) = split_record(&line, layout, pos)? else {
            continue;
        };
        let sequence = decode_sequence(tokens, pos)?;
        builder.add_record(name, sequence, flags);
        records += 1;
    }
    debug!("{label}: folded {records} records from {list}");
    Ok(())
}
