//! The canonical glyph name to code point mapping table.
//!
//! Records from all source lists fold into one name-keyed table that
//! iterates in first-insertion order. Single code points are stored
//! inline in the entry; longer sequences (ligatures such as "ffi") live
//! out-of-line in an append-only pool referenced by position.

use std::borrow::Cow;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::warn;
use smol_str::SmolStr;

use crate::error::{GlyphError, Result};
use crate::parser::encode_sequence;
use crate::source::SourceFlags;

/// A Unicode code point in the Basic Multilingual Plane.
pub type CodePoint = u16;

/// A glyph name: non-empty, case-sensitive, matched exactly.
pub type GlyphName = SmolStr;

/// Where a mapping entry's code points live.
///
/// The kind is fully determined by sequence length: length 1 stores the
/// code point inline, anything longer stores a ligature pool position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Inline(CodePoint),
    Ligature { index: usize },
}

/// One glyph name's row in the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Union of every source list that defines this name.
    pub flags: SourceFlags,
    /// Length of the code point sequence.
    pub len: usize,
    pub storage: Storage,
}

/// Out-of-line storage for multi-code-point sequences.
///
/// Append-only: positions are handed out once and never renumbered, so
/// they stay valid as cross-reference keys through emission.
#[derive(Debug, Default)]
pub struct LigaturePool {
    entries: Vec<(GlyphName, Vec<CodePoint>)>,
}

impl LigaturePool {
    /// Append a pair and return its 0-based position.
    pub fn insert(&mut self, name: GlyphName, sequence: Vec<CodePoint>) -> usize {
        self.entries.push((name, sequence));
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&str, &[CodePoint])> {
        self.entries
            .get(index)
            .map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CodePoint])> {
        self.entries
            .iter()
            .map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }
}

/// Folds records from all source lists into one name-keyed table.
#[derive(Debug, Default)]
pub struct MappingTableBuilder {
    entries: IndexMap<GlyphName, MappingEntry>,
    ligatures: LigaturePool,
}

impl MappingTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed record into the table.
    ///
    /// The first occurrence of a name is authoritative for its code
    /// points; later occurrences only contribute membership flags, even
    /// when they carry a different sequence. Keeping the first sequence
    /// reproduces the behavior the downstream consumer was built
    /// against.
    pub fn add_record(&mut self, name: &str, sequence: Vec<CodePoint>, flags: SourceFlags) {
        debug_assert!(!sequence.is_empty());

        if let Some(entry) = self.entries.get_mut(name) {
            entry.flags |= flags;
            let same = match entry.storage {
                Storage::Inline(cp) => sequence.len() == 1 && sequence[0] == cp,
                Storage::Ligature { index } => self
                    .ligatures
                    .get(index)
                    .is_some_and(|(_, stored)| stored == sequence.as_slice()),
            };
            if !same {
                warn!(
                    "glyph {name:?} redefined as {}; keeping the first definition",
                    encode_sequence(&sequence)
                );
            }
            return;
        }

        let name = GlyphName::from(name);
        let len = sequence.len();
        let storage = if len == 1 {
            Storage::Inline(sequence[0])
        } else {
            Storage::Ligature {
                index: self.ligatures.insert(name.clone(), sequence),
            }
        };
        self.entries.insert(name, MappingEntry { flags, len, storage });
    }

    /// Tag every name of the Latin character set on its existing entry.
    ///
    /// The set is expected to be a subset of the names the source files
    /// already defined; a name without an entry aborts the run with
    /// `UnknownLatinName`. Stored sequences are never touched.
    pub fn apply_latin_subset<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            match self.entries.get_mut(name) {
                Some(entry) => entry.flags |= SourceFlags::LATIN_TEXT_ENCODINGS,
                None => return Err(GlyphError::UnknownLatinName(GlyphName::from(name))),
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MappingEntry> {
        self.entries.get(name)
    }

    /// Freeze the builder; no mutation happens after this point.
    pub fn finish(self) -> CompiledTable {
        CompiledTable {
            entries: self.entries,
            ligatures: self.ligatures,
        }
    }
}

/// The finished, immutable mapping table.
#[derive(Debug)]
pub struct CompiledTable {
    entries: IndexMap<GlyphName, MappingEntry>,
    ligatures: LigaturePool,
}

impl CompiledTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MappingEntry> {
        self.entries.get(name)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn ligatures(&self) -> &LigaturePool {
        &self.ligatures
    }

    /// Resolve a name to its full code point sequence.
    pub fn codepoints(&self, name: &str) -> Option<Cow<'_, [CodePoint]>> {
        let entry = self.entries.get(name)?;
        match entry.storage {
            Storage::Inline(cp) => Some(Cow::Owned(vec![cp])),
            Storage::Ligature { index } => {
                self.ligatures.get(index).map(|(_, seq)| Cow::Borrowed(seq))
            }
        }
    }

    /// Derive the code point to names reverse lookup.
    ///
    /// Walks the table in first-insertion order; only simple (length-1)
    /// mappings contribute, and a name is appended to a bucket at most
    /// once. Ligatures are never inverse-indexed.
    pub fn inverse_index(&self) -> InverseIndex {
        let mut buckets: BTreeMap<CodePoint, Vec<GlyphName>> = BTreeMap::new();
        for (name, entry) in &self.entries {
            let Storage::Inline(cp) = entry.storage else {
                continue;
            };
            let bucket = buckets.entry(cp).or_default();
            if !bucket.iter().any(|existing| existing == name) {
                bucket.push(name.clone());
            }
        }
        InverseIndex { buckets }
    }
}

/// Reverse lookup from a single code point to the glyph names that map
/// to exactly that code point.
///
/// Built once from a completed table; read-only thereafter. Buckets keep
/// table first-insertion order; keys iterate in ascending code point
/// order.
#[derive(Debug, Default)]
pub struct InverseIndex {
    buckets: BTreeMap<CodePoint, Vec<GlyphName>>,
}

impl InverseIndex {
    /// Candidate names for a code point, possibly empty.
    pub fn names(&self, cp: CodePoint) -> &[GlyphName] {
        self.buckets.get(&cp).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = (CodePoint, &[GlyphName])> {
        self.buckets.iter().map(|(&cp, names)| (cp, names.as_slice()))
    }
}
