//! Bytekit CLI
//!
//! Usage:
//!   bytekit sort poem.txt --order reverse -o rhymes.txt
//!   bytekit replace data.csv ';' ','

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use bytekit::bytes::replace_in_file;
use bytekit::logger::init_cli_logger;
use bytekit::sort::quick_sort;
use bytekit::words::{letter_cmp, reverse_letter_cmp, split_lines};

#[derive(Parser, Debug)]
#[command(name = "bytekit", version, about = "Line sorting and in-place byte replacement")]
struct Cli {
    /// Verbose output (trace per partisi)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort baris file berdasarkan hurufnya saja
    Sort {
        /// File input
        input: PathBuf,

        /// File output (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Arah pembacaan huruf
        #[arg(long, value_enum, default_value_t = Order::Forward)]
        order: Order,
    },
    /// Ganti satu byte dengan byte lain langsung di file
    Replace {
        file: PathBuf,

        /// Byte yang dicari: satu karakter ASCII atau hex `0xNN`
        #[arg(value_parser = parse_byte)]
        was: u8,

        /// Byte pengganti: satu karakter ASCII atau hex `0xNN`
        #[arg(value_parser = parse_byte)]
        will: u8,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    /// Awal ke akhir baris
    Forward,
    /// Akhir ke awal baris (urutan rima)
    Reverse,
}

/// Konfigurasi untuk perintah sort
struct SortConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    order: Order,
}

fn run_sort(config: SortConfig) -> bytekit::Result<()> {
    let text = fs::read(&config.input)?;
    let mut lines = split_lines(&text);
    info!(path = %config.input.display(), lines = lines.len(), "input loaded");

    let start = Instant::now();
    match config.order {
        Order::Forward => quick_sort(&mut lines, letter_cmp),
        Order::Reverse => quick_sort(&mut lines, reverse_letter_cmp),
    }
    info!(elapsed_us = start.elapsed().as_micros() as u64, order = ?config.order, "lines sorted");

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);

    for line in &lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}

/// Parse argumen byte: `0xNN` untuk byte apa pun, atau satu karakter ASCII
fn parse_byte(arg: &str) -> Result<u8, String> {
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).map_err(|e| format!("invalid hex byte '{arg}': {e}"));
    }

    match arg.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "expected a single ASCII character or 0xNN, got '{arg}'"
        )),
    }
}

fn run_replace(file: PathBuf, was: u8, will: u8) -> bytekit::Result<()> {
    let replaced = replace_in_file(&file, was, will)?;
    println!("{}: {} byte(s) replaced", file.display(), replaced);

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let result = match cli.command {
        Command::Sort {
            input,
            output,
            order,
        } => run_sort(SortConfig {
            input,
            output,
            order,
        }),
        Command::Replace { file, was, will } => run_replace(file, was, will),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
