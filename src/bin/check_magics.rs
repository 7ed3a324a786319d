use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser as ClapParser;
use itertools::Itertools;
use nom::{
    bytes::complete::tag,
    character::complete::{hex_digit1, multispace0},
    combinator::{map, map_res},
    error::ParseError,
    multi::many1,
    sequence::{delimited, preceded, terminated, tuple},
    Finish, IResult, Parser,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use magus::board::{BitBoard, Square};
use magus::magic::attacks::sliding_attacks;
use magus::magic::table::AttackTables;
use magus::slider::SliderKind;

#[derive(clap::Parser)]
/// Re-validate a previously generated magic table: parse the generator's
/// Python-syntax output, rebuild the full attack tables from the parsed
/// constants, and cross-check magic lookup against direct ray casting.
struct Args {
    /// File holding the generator output. Reads stdin when omitted.
    path: Option<PathBuf>,
}

fn ws<'a, O, E: ParseError<&'a str>, F>(inner: F) -> impl Parser<&'a str, O, E>
where
    F: Parser<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_hex(input: &str) -> IResult<&str, u64> {
    map_res(preceded(tag("0x"), hex_digit1), |digits: &str| {
        u64::from_str_radix(digits, 16)
    })(input)
}

fn parse_block<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<u64>> {
    move |input| {
        map(
            tuple((
                ws(tag(name)),
                ws(tag("=")),
                ws(tag("[")),
                many1(terminated(ws(parse_hex), ws(tag(",")))),
                ws(tag("]")),
            )),
            |(_, _, _, magics, _)| magics,
        )(input)
    }
}

fn parse_tables(input: &str) -> Result<(Vec<u64>, Vec<u64>)> {
    // the generator leads with a '#' comment line
    let stripped: String = input
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .join("\n");

    let parsed = tuple((
        parse_block("ROOK_MAGICS"),
        parse_block("BISHOP_MAGICS"),
    ))(stripped.as_str())
    .map_err(|e| e.to_owned())
    .finish()
    .map(|x| x.1)?;
    Ok(parsed)
}

fn verify_block(kind: SliderKind, magics: Vec<u64>) -> Result<()> {
    ensure!(
        magics.len() == 64,
        "{kind} block holds {} entries, expected 64",
        magics.len()
    );
    ensure!(
        magics.iter().all(|m| *m != 0),
        "{kind} block contains a zero magic"
    );

    let magics: [u64; 64] = magics.try_into().expect("length checked above");
    let tables =
        AttackTables::build(kind, &magics).with_context(|| format!("invalid {kind} magics"))?;

    // table construction has already proven the perfect-hash invariant
    // over every mask subset; also confirm lookups agree with ray
    // casting on occupancies that spill outside the masks
    let mut rng = ChaCha8Rng::seed_from_u64(0x6d616769);
    for _ in 0..100 {
        let blockers = BitBoard::new(rng.gen::<u64>() & rng.gen::<u64>());

        for sq in Square::iter_all() {
            ensure!(
                tables.lookup(sq, blockers) == sliding_attacks(kind, sq, blockers),
                "{kind} lookup diverges from ray casting on {sq:?}"
            );
        }
    }

    println!("{kind} magics OK (64 entries)");

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = match &args.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let (rook, bishop) = parse_tables(&input)?;

    for (i, block) in [rook, bishop].into_iter().enumerate() {
        let kind = SliderKind::try_from(i as u8)?;
        verify_block(kind, block)?;
    }

    println!("all 128 magics verified");

    Ok(())
}
