//! CLI tool for building and inspecting type descriptor schemas.
//!
//! Provides commands for:
//! - Emitting schema text from descriptor fields
//! - Resolving element byte addresses from a schema
//! - Inspecting a schema and listing the kind catalog

use std::fmt::Write as _;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dtype_core::schema::UNKNOWN_NAME;
use dtype_core::types::{size_of_type_id, type_name_to_id, TypeDescriptor, TypeKind};
use dtype_core::SchemaConfig;

/// Command-line arguments for the descriptor tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the schema of a descriptor built from its fields
    Schema {
        /// Kind name (e.g. uint32, float64)
        dtype: String,

        /// Number of elements
        #[arg(long, default_value_t = 1)]
        length: u64,

        /// Byte offset of element 0
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,

        /// Byte distance between elements (default: element width)
        #[arg(long, allow_hyphen_values = true)]
        stride: Option<i64>,

        /// Byte width of one element (default: canonical width of the kind)
        #[arg(long)]
        element_bytes: Option<u64>,
    },

    /// Print the byte address of the given elements
    Index {
        /// Schema text
        schema: String,

        /// Element indices
        #[arg(required = true)]
        indices: Vec<u64>,
    },

    /// Describe a schema: kind, geometry, size, and element addresses
    Inspect {
        /// Schema text
        schema: String,

        /// Reject dtype names outside the catalog
        #[arg(long)]
        strict: bool,

        /// Maximum number of element addresses to list
        #[arg(long, default_value_t = 16)]
        max_elements: u64,
    },

    /// List the kind catalog
    Kinds,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let output = run(args.command)?;
    print!("{}", output);
    Ok(())
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Schema {
            dtype,
            length,
            offset,
            stride,
            element_bytes,
        } => {
            let element_bytes =
                element_bytes.unwrap_or_else(|| size_of_type_id(type_name_to_id(&dtype)));
            let stride = match stride {
                Some(stride) => stride,
                None => i64::try_from(element_bytes)
                    .context("element width does not fit a stride; pass --stride")?,
            };
            let descriptor = TypeDescriptor::from_name(&dtype, length, offset, stride, element_bytes);
            if descriptor.is_empty() && dtype != TypeKind::Empty.name() {
                tracing::warn!("dtype {:?} is not in the catalog, emitting an empty schema", dtype);
            }
            Ok(format!("{}\n", descriptor))
        }
        Command::Index { schema, indices } => {
            let descriptor = parse_schema(&schema, &SchemaConfig::default())?;
            let mut out = String::new();
            for idx in indices {
                if idx >= descriptor.number_of_elements() {
                    tracing::warn!(
                        "index {} is past the element count {}",
                        idx,
                        descriptor.number_of_elements()
                    );
                }
                writeln!(out, "{}\t{}", idx, descriptor.element_index(idx))?;
            }
            Ok(out)
        }
        Command::Inspect {
            schema,
            strict,
            max_elements,
        } => {
            let config = SchemaConfig {
                strict_dtype: strict,
            };
            let descriptor = parse_schema(&schema, &config)?;
            inspect(&descriptor, max_elements)
        }
        Command::Kinds => {
            let mut out = String::new();
            for kind in TypeKind::ALL {
                writeln!(out, "{}\t{}\t{}", kind.id(), kind.name(), kind.size())?;
            }
            Ok(out)
        }
    }
}

fn parse_schema(text: &str, config: &SchemaConfig) -> anyhow::Result<TypeDescriptor> {
    TypeDescriptor::from_schema_with(text, config)
        .with_context(|| format!("failed to parse schema {}", text))
}

fn inspect(descriptor: &TypeDescriptor, max_elements: u64) -> anyhow::Result<String> {
    if max_elements == 0 {
        bail!("--max-elements must be at least 1");
    }

    let name = descriptor.kind().map_or(UNKNOWN_NAME, TypeKind::name);
    let mut out = String::new();
    writeln!(out, "dtype: {} (id {})", name, descriptor.id())?;
    writeln!(out, "length: {}", descriptor.number_of_elements())?;
    writeln!(out, "offset: {}", descriptor.offset())?;
    writeln!(out, "stride: {}", descriptor.stride())?;
    writeln!(out, "element_bytes: {}", descriptor.element_bytes())?;
    writeln!(out, "total_bytes: {}", descriptor.total_bytes())?;

    let addresses: Vec<String> = descriptor
        .element_indices()
        .take(max_elements as usize)
        .map(|address| address.to_string())
        .collect();
    write!(out, "addresses: [{}", addresses.join(", "))?;
    let remaining = descriptor.number_of_elements().saturating_sub(max_elements);
    if remaining > 0 {
        write!(out, ", ... {} more", remaining)?;
    }
    writeln!(out, "]")?;
    Ok(out)
}
