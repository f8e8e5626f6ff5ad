//! aglbuild - compile the Adobe glyph lists into an embeddable table.
//!
//! Reads the standard glyph list, the new-fonts list and the
//! ZapfDingbats list, merges them into one mapping table and writes the
//! result as JSON records or as a generated Rust source table.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use glyphtab_core::{Compiler, Emission};
use serde::Serialize;

/// Output type for the compiled table.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// JSON artifact (default)
    #[default]
    Json,
    /// Generated Rust source file with static tables
    Rust,
}

/// Compile the Adobe glyph lists into a deterministic mapping table.
#[derive(Parser, Debug)]
#[command(name = "aglbuild")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Adobe Glyph List (glyphlist.txt)
    #[arg(long)]
    agl: PathBuf,

    /// Path to the Adobe Glyph List for New Fonts (aglfn.txt)
    #[arg(long)]
    aglfn: PathBuf,

    /// Path to the ZapfDingbats glyph list (zapfdingbats.txt)
    #[arg(long)]
    zapf: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output_type", value_enum, default_value = "json")]
    output_type: OutputType,

    /// Also emit the code point to names reverse index
    #[arg(long, action = ArgAction::SetTrue)]
    inverse: bool,

    /// Print pass statistics to stderr
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// JSON shape of one mapping record.
#[derive(Serialize)]
struct JsonMapping<'a> {
    name: &'a str,
    flags: u8,
    len: usize,
    value: u32,
}

/// JSON shape of one ligature pool record.
#[derive(Serialize)]
struct JsonLigature<'a> {
    name: &'a str,
    codepoints: &'a [u16],
}

/// JSON shape of one reverse index bucket.
#[derive(Serialize)]
struct JsonInverse<'a> {
    codepoint: u16,
    names: Vec<&'a str>,
}

/// The whole artifact as a single JSON document.
#[derive(Serialize)]
struct JsonArtifact<'a> {
    mappings: Vec<JsonMapping<'a>>,
    ligatures: Vec<JsonLigature<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inverse: Option<Vec<JsonInverse<'a>>>,
}

fn write_json(emission: &Emission, out: &mut dyn Write) -> io::Result<()> {
    let artifact = JsonArtifact {
        mappings: emission
            .mappings
            .iter()
            .map(|record| JsonMapping {
                name: record.name.as_str(),
                flags: record.flags,
                len: record.len,
                value: record.value,
            })
            .collect(),
        ligatures: emission
            .ligatures
            .iter()
            .map(|record| JsonLigature {
                name: record.name.as_str(),
                codepoints: &record.codepoints,
            })
            .collect(),
        inverse: emission.inverse.as_ref().map(|pairs| {
            pairs
                .iter()
                .map(|(cp, names)| JsonInverse {
                    codepoint: *cp,
                    names: names.iter().map(|name| name.as_str()).collect(),
                })
                .collect()
        }),
    };
    serde_json::to_writer_pretty(&mut *out, &artifact)?;
    writeln!(out)
}

fn write_rust(emission: &Emission, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "// This file was generated. DO NOT EDIT!")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// (name, source flags, sequence length, code point or ligature index)"
    )?;
    writeln!(
        out,
        "pub static GLYPH_MAPPINGS: &[(&str, u8, u16, u32)] = &["
    )?;
    for record in &emission.mappings {
        writeln!(
            out,
            "    ({:?}, {:#04x}, {}, {:#06X}),",
            record.name.as_str(),
            record.flags,
            record.len,
            record.value
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// (name, code point sequence), indexed by pool position")?;
    writeln!(out, "pub static GLYPH_LIGATURES: &[(&str, &[u16])] = &[")?;
    for record in &emission.ligatures {
        let codepoints: Vec<String> = record
            .codepoints
            .iter()
            .map(|cp| format!("{cp:#06X}"))
            .collect();
        writeln!(
            out,
            "    ({:?}, &[{}]),",
            record.name.as_str(),
            codepoints.join(", ")
        )?;
    }
    writeln!(out, "];")?;

    if let Some(inverse) = &emission.inverse {
        writeln!(out)?;
        writeln!(out, "/// (code point, names), ascending by code point")?;
        writeln!(
            out,
            "pub static GLYPH_NAMES_BY_CODEPOINT: &[(u16, &[&str])] = &["
        )?;
        for (cp, names) in inverse {
            let names: Vec<String> = names
                .iter()
                .map(|name| format!("{:?}", name.as_str()))
                .collect();
            writeln!(out, "    ({cp:#06X}, &[{}]),", names.join(", "))?;
        }
        writeln!(out, "];")?;
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let compiler = Compiler::new();
    let table = match compiler.compile_paths(&args.agl, &args.aglfn, &args.zapf) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.debug {
        eprintln!(
            "compiled {} mappings, {} ligatures",
            table.len(),
            table.ligatures().len()
        );
    }

    let emission = Emission::project(&table, args.inverse);

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    match args.output_type {
        OutputType::Json => write_json(&emission, &mut output)?,
        OutputType::Rust => write_rust(&emission, &mut output)?,
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphtab_core::{SourceFlags, SourceList};

    fn sample_emission() -> Emission {
        let mut builder = glyphtab_core::MappingTableBuilder::new();
        builder.add_record("space", vec![0x0020], SourceList::AdobeGlyphList.flags());
        builder.add_record(
            "ffi",
            vec![0x0066, 0x0066, 0x0069],
            SourceList::AdobeGlyphList.flags(),
        );
        Emission::project(&builder.finish(), true)
    }

    #[test]
    fn test_rust_output_shape() {
        let mut out = Vec::new();
        write_rust(&sample_emission(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("// This file was generated. DO NOT EDIT!"));
        assert!(text.contains("(\"space\", 0x01, 1, 0x0020),"));
        assert!(text.contains("(\"ffi\", &[0x0066, 0x0066, 0x0069]),"));
        assert!(text.contains("(0x0020, &[\"space\"]),"));
    }

    #[test]
    fn test_json_output_is_deterministic() {
        let emission = sample_emission();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_json(&emission, &mut first).unwrap();
        write_json(&emission, &mut second).unwrap();
        assert_eq!(first, second);
        let text = String::from_utf8(first).unwrap();
        assert!(text.contains("\"name\": \"space\""));
    }

    #[test]
    fn test_flags_serialize_as_bits() {
        let flags = SourceFlags::ADOBE_GLYPH_LIST | SourceFlags::LATIN_TEXT_ENCODINGS;
        assert_eq!(flags.bits(), 0b1001);
    }
}
