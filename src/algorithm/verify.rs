//! Independent checks that rendered waits describe legal completions
//!
//! Works from the rendered text alone, re-reading every group against the
//! catalog, so it shares no state with the search that produced the lines.

use crate::algorithm::catalog::{Catalog, Group};
use crate::algorithm::decomposition::find_partitions;
use crate::algorithm::solver::{Solution, Solver};
use crate::io::configuration::{COMPLETE_HAND_SIZE, GROUPS_PER_PARTITION, TILE_MAX, TILE_MIN};
use crate::io::error::{Result, inconsistent_wait, invalid_hand};
use crate::tiles::hand::Hand;
use crate::tiles::mask::TileMask;
use std::collections::HashSet;

/// Split a rendered line into its bracketed groups
fn split_groups(line: &str) -> Option<Vec<&str>> {
    let mut groups = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let close = match rest.chars().next()? {
            '(' => ')',
            '[' => ']',
            _ => return None,
        };
        let end = rest.find(close)?;
        let (group, tail) = rest.split_at(end + close.len_utf8());
        groups.push(group);
        rest = tail;
    }
    Some(groups)
}

fn digits(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|digit| u8::try_from(digit).ok())
}

fn closed_group(catalog: &'static Catalog, text: &str) -> Option<&'static Group> {
    catalog.iter().find(|group| group.closed() == text)
}

/// Tiles that turn an open group back into a catalog group
fn open_completions(catalog: &'static Catalog, text: &str) -> TileMask {
    TileMask::from_tiles((TILE_MIN..=TILE_MAX).filter(|&tile| {
        catalog
            .groups_containing(tile)
            .any(|group| group.open(tile) == Some(text))
    }))
}

/// Check one rendered line against the hand it was produced for
///
/// The line must hold four closed sets and one pair, exactly one of the
/// five open and written last, and its digits must be the 13 tiles of
/// `hand`. Returns every tile that completes the open group without a
/// fifth copy.
///
/// # Errors
///
/// Returns `InconsistentWait` describing the first violated condition
pub fn check_line(hand: &Hand, line: &str) -> Result<TileMask> {
    let catalog = Catalog::global();
    let fail = |reason: &str| inconsistent_wait(hand, &line, &reason);

    let groups = split_groups(line).ok_or_else(|| fail("unbalanced brackets"))?;
    if groups.len() != GROUPS_PER_PARTITION {
        return Err(fail("expected five groups"));
    }

    let mut open = None;
    let mut pairs = 0;
    for (position, text) in groups.iter().enumerate() {
        if text.starts_with('[') {
            if open.is_some() {
                return Err(fail("more than one open group"));
            }
            if position + 1 != GROUPS_PER_PARTITION {
                return Err(fail("open group is not last"));
            }
            let completions = open_completions(catalog, text);
            if completions.is_empty() {
                return Err(fail("open group cannot be completed"));
            }
            // A single remaining tile can only be a pair waiting on its twin
            if digits(text).count() == 1 {
                pairs += 1;
            }
            open = Some(completions);
        } else {
            let group = closed_group(catalog, text).ok_or_else(|| fail("unknown closed group"))?;
            if group.members().len() == 2 {
                pairs += 1;
            }
        }
    }

    let completions = open.ok_or_else(|| fail("no open group"))?;
    if pairs != 1 {
        return Err(fail("expected exactly one pair"));
    }

    let tiles = Hand::from_tiles(groups.iter().copied().flat_map(digits));
    if tiles.as_ref() != Some(hand) {
        return Err(fail("tiles do not match the hand"));
    }

    Ok(TileMask::from_tiles(
        completions
            .to_vec()
            .into_iter()
            .filter(|&tile| hand.add(tile).is_some()),
    ))
}

/// Check every line of a solution and that together they cover its completions
///
/// # Errors
///
/// Returns `InconsistentWait` if a line is invalid, repeated, or the lines
/// disagree with the set of completing tiles
pub fn check_solution(solution: &Solution) -> Result<()> {
    let hand = solution.hand();
    let mut seen = HashSet::new();
    let mut covered = TileMask::new();

    for line in solution.lines() {
        if !seen.insert(line.as_str()) {
            return Err(inconsistent_wait(hand, line, &"line repeated"));
        }
        covered = covered.union(&check_line(hand, line)?);
    }

    if covered != solution.completions() {
        return Err(inconsistent_wait(
            hand,
            &solution.block(),
            &format!(
                "lines complete on [{covered}] but the hand completes on [{}]",
                solution.completions()
            ),
        ));
    }

    Ok(())
}

/// Check a complete hand from the other direction
///
/// Removing any one tile from a complete 14-tile hand leaves a waiting hand
/// that must list the removed tile among its completions, with every line
/// passing [`check_solution`].
///
/// # Errors
///
/// Returns `InvalidHand` if `complete` is not a complete hand, or
/// `InconsistentWait` if a derived hand misses its removed tile
pub fn check_complete_hand(solver: &mut Solver, complete: &Hand) -> Result<()> {
    if complete.len() != COMPLETE_HAND_SIZE || find_partitions(complete).is_empty() {
        return Err(invalid_hand(complete, &"not a complete hand"));
    }

    for tile in complete.presence().to_vec() {
        let Some(waiting) = complete.remove(tile, 1) else {
            continue;
        };
        let solution = solver.solve(&waiting);
        if !solution.completions().contains(tile) {
            return Err(inconsistent_wait(
                &waiting,
                &solution.block(),
                &format!("{tile} should complete the hand"),
            ));
        }
        check_solution(&solution)?;
    }

    Ok(())
}
