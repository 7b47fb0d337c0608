// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/seedlsb

//! Command-line front-end.
//!
//! Thin wrapper over the library: decode the carrier, run the engine, write
//! PNG. With a chain of seeds, `hide` replays (extracts and discards) levels
//! 1…n−1 to reconstruct their reserved pixels, then hides the payload at
//! level n; `extract` walks the chain the same way and prints the level-n
//! payload.

use std::error::Error;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use seedlsb::{pngify, EngineOptions, LosslessImage, SeedChain, StegoEngine};

#[derive(Parser)]
#[command(
    name = "seedlsb",
    version,
    about = "Seed-keyed LSB-matching steganography over lossless images"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hide a payload in the pixels of an image
    Hide {
        /// Cover image (lossless, 8-bit RGB or RGBA)
        #[arg(short, long)]
        input: PathBuf,
        /// Output path; defaults to overwriting the input. Always PNG.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Secret seed; repeat the flag to address deeper chain levels
        #[arg(short, long = "seed", required = true)]
        seeds: Vec<String>,
        /// Payload file; read from stdin when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Use seeds directly as PRNG keys, skipping derivation (discouraged)
        #[arg(long)]
        raw_seed: bool,
        /// Mark visited pixels with each level's colour instead of data
        #[arg(long)]
        testmode: bool,
    },
    /// Extract a hidden payload from an image
    Extract {
        /// Carrier image
        #[arg(short, long)]
        input: PathBuf,
        /// Secret seed; repeat the flag to address deeper chain levels
        #[arg(short, long = "seed", required = true)]
        seeds: Vec<String>,
        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Use seeds directly as PRNG keys, skipping derivation
        #[arg(long)]
        raw_seed: bool,
    },
    /// Convert any image to PNG so it can serve as a lossless cover
    Pngify {
        /// Source image (may be lossy, e.g. JPEG)
        #[arg(short, long)]
        input: PathBuf,
        /// Destination PNG
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn build_chain(seeds: &[String], raw: bool) -> Result<SeedChain, Box<dyn Error>> {
    let bytes: Vec<Vec<u8>> = seeds.iter().map(|s| s.as_bytes().to_vec()).collect();
    let chain = if raw {
        SeedChain::new_raw(bytes)?
    } else {
        SeedChain::new(bytes)?
    };
    Ok(chain)
}

fn read_payload(data: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn Error>> {
    match data {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Command::Hide {
            input,
            output,
            seeds,
            data,
            raw_seed,
            testmode,
        } => {
            let payload = read_payload(data.as_ref())?;
            let mut image = LosslessImage::open(&input)?;
            let chain = build_chain(&seeds, raw_seed)?;
            let levels = chain.levels();

            let mut engine =
                StegoEngine::with_options(&mut image, chain, EngineOptions { testmode });
            if testmode {
                // Mark every level's coverage, each in its own colour.
                for _ in 1..levels {
                    engine.hide(&payload)?;
                    engine.advance()?;
                }
            } else {
                // Replay earlier levels to reserve their pixels.
                for _ in 1..levels {
                    engine.extract()?;
                    engine.advance()?;
                }
            }
            engine.hide(&payload)?;
            drop(engine);

            image.save_png(output.as_deref().unwrap_or(&input))?;
        }
        Command::Extract {
            input,
            seeds,
            output,
            raw_seed,
        } => {
            let mut image = LosslessImage::open(&input)?;
            let chain = build_chain(&seeds, raw_seed)?;
            let levels = chain.levels();

            let mut engine = StegoEngine::new(&mut image, chain);
            let mut payload = engine.extract()?;
            for _ in 1..levels {
                engine.advance()?;
                payload = engine.extract()?;
            }

            match output {
                Some(path) => std::fs::write(path, &payload)?,
                None => std::io::stdout().write_all(&payload)?,
            }
        }
        Command::Pngify { input, output } => {
            pngify(&input, &output)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
